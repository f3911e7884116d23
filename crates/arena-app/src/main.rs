//! Headless demo driver: starts a run, drives the tank forward, fires a
//! few shots, and prints periodic snapshot summaries to the log.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use log::info;

use arena_app::game_loop::spawn_game_loop;
use arena_app::state::{GameLoopCommand, SharedSnapshot};
use arena_core::commands::PlayerCommand;
use arena_core::enums::{GamePhase, InputKey};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let cmd_tx = spawn_game_loop(latest_snapshot.clone());

    let send = |cmd: PlayerCommand| {
        let _ = cmd_tx.send(GameLoopCommand::Player(cmd));
    };

    send(PlayerCommand::StartGame);
    send(PlayerCommand::KeyDown {
        key: InputKey::Forward,
    });

    for second in 1..=10 {
        thread::sleep(Duration::from_secs(1));

        if second % 2 == 0 {
            send(PlayerCommand::KeyDown {
                key: InputKey::Fire,
            });
        }

        if let Ok(lock) = latest_snapshot.lock() {
            if let Some(snapshot) = lock.as_ref() {
                info!(
                    "tick {} | player at ({:.1}, {:.1}) hp {}/{} | {} enemies, {} shells, {} packs",
                    snapshot.time.tick,
                    snapshot.player.position.x,
                    snapshot.player.position.z,
                    snapshot.player.health,
                    snapshot.player.max_health,
                    snapshot.enemies.len(),
                    snapshot.projectiles.len(),
                    snapshot.health_packs.len(),
                );
                if snapshot.phase == GamePhase::Defeat {
                    info!("run over");
                    break;
                }
            }
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
}
