mod categories;
mod config;
mod fetcher;
mod filter;
mod model;
mod parser;
mod state;
mod utils;

use categories::CATEGORIES;
use config::{AppConfig, load_config};
use fetcher::{EquipmentSource, HttpSource};
use model::{Equipment, StatusStyle};
use state::ViewState;
use std::env;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config: AppConfig = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let source = match HttpSource::new(&config.api_base_url, config.request_timeout_seconds) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to build equipment source: {}", e);
            return;
        }
    };

    // --category=<id> selects a category tile; every other arg joins the
    // free-text search term.
    let mut selected_category: Option<String> = None;
    let mut search_words: Vec<String> = Vec::new();
    for arg in env::args().skip(1) {
        if let Some(id) = arg.strip_prefix("--category=") {
            selected_category = Some(id.to_string());
        } else {
            search_words.push(arg);
        }
    }
    let search_term = search_words.join(" ");

    let mut view = ViewState::new();

    info!("Fetching equipment from {}...", config.api_base_url);
    let records = match source.fetch_equipment().await {
        Ok(payload) => {
            let records = parser::parse_equipment(&payload);
            info!("Fetched {} equipment records", records.len());
            records
        }
        Err(e) => {
            // Matches the board's behavior: the failure is logged and the
            // view comes up empty rather than erroring out.
            warn!("Equipment fetch failed: {}", e);
            Vec::new()
        }
    };
    view = view.receive_records(records);

    view = view.set_search(&search_term);
    if let Some(id) = &selected_category {
        if categories::find(id).is_none() {
            warn!("Unknown category id: {}", id);
        }
        view = view.select_category(id);
    }

    if view.search_term().is_empty() && view.selected_category().is_none() {
        print_category_grid(&view, &config);
    }
    print_listing(&view, &config);
}

fn print_category_grid(view: &ViewState, config: &AppConfig) {
    println!("Equipment categories:");
    for category in &CATEGORIES {
        println!(
            "  {:<28} {:>4}  [{}]",
            category.display_name(config.locale),
            view.category_count(category.id),
            category.id
        );
    }
    println!();
}

fn print_listing(view: &ViewState, config: &AppConfig) {
    let visible = view.visible();

    match view.selected_category().and_then(categories::find) {
        Some(category) => println!(
            "{} — {} equipment",
            category.display_name(config.locale),
            visible.len()
        ),
        None => println!("All equipment — {} records", visible.len()),
    }

    if visible.is_empty() {
        println!("No equipment found matching your search.");
        return;
    }

    for eq in visible {
        print_equipment(eq);
    }
}

fn print_equipment(eq: &Equipment) {
    let style = StatusStyle::from_status(&eq.status);
    println!("- {} [{}] ({})", eq.name, eq.status, style.class());
    println!("    asset: {}  plate/serial: {}", eq.asset_no, eq.plate_serial_no);
    if !eq.department.is_empty() {
        println!("    zone/department: {}", eq.department);
    }
    print_driver("day", &eq.day_driver_name, &eq.day_driver_phone);
    print_driver("night", &eq.night_driver_name, &eq.night_driver_phone);
    if !eq.has_assigned_driver() {
        println!("    driver: unassigned");
    }
    if !eq.remarks.is_empty() {
        println!("    remarks: {}", eq.remarks);
    }
}

fn print_driver(shift: &str, name: &str, phone: &str) {
    if name.is_empty() {
        return;
    }
    match utils::tel_uri(phone) {
        Some(uri) => println!("    {} shift: {} ({})", shift, name, uri),
        None => println!("    {} shift: {}", shift, name),
    }
}
