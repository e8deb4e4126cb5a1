// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// This is the primary entry point for the Background Remover application.
// The lib.rs file serves only as a public API for external consumers.

mod commands;
mod core;
mod processing;
mod storage;
mod utils;

use tracing::{info, debug};
use tauri::Manager;
use crate::core::{AppConfig, AppState};
use crate::commands::{
    compare_pointer, compare_reset, current_session, delete_history_entry, export_result,
    load_history, login, logout, remove_background, save_to_history, select_image, signup,
};

fn main() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)         // Keep colored output
        .with_writer(std::io::stdout)
        .compact();              // Use compact formatter instead of pretty

    subscriber.init();

    info!("=== Application Starting ===");

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_process::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_fs::init())
        .plugin(tauri_plugin_os::init())
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_store::Builder::new().build())
        .invoke_handler(tauri::generate_handler![
            current_session,
            login,
            signup,
            logout,
            select_image,
            remove_background,
            save_to_history,
            export_result,
            load_history,
            delete_history_entry,
            compare_reset,
            compare_pointer,
        ])
        .setup(|app| {
            let app_data = app.path().app_data_dir()?;
            std::fs::create_dir_all(&app_data)?;

            let config = AppConfig::load_or_create(&app_data)?;
            debug!("Removal endpoint: {}", config.removal_endpoint);

            let state = AppState::new(app.app_handle(), &config)?;
            app.manage(state);
            debug!("✓ AppState initialized");

            // Register updater plugin (desktop only)
            #[cfg(desktop)]
            {
                app.handle()
                    .plugin(tauri_plugin_updater::Builder::new().build())
                    .expect("Failed to initialize updater plugin");
                debug!("✓ Updater plugin initialized");
            }

            // Pick up a persisted session so the UI starts signed in
            let state = app.state::<AppState>();
            let restored = tauri::async_runtime::block_on(async {
                let mut session = state.session.lock().await;
                session.restore().cloned()
            });
            match restored {
                Some(identity) => info!("Session restored for {}", identity.email),
                None => debug!("No persisted session"),
            }

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    info!("Starting application event loop...");
    app.run(|_app_handle, event| {
        if let tauri::RunEvent::Exit = event {
            info!("Application exiting");
        }
    });
}
