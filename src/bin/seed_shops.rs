//! Fills an empty directory database with demo shop listings.

use std::env;

use chrono::{Duration, NaiveDateTime, Utc};
use dotenvy::dotenv;

use tireshop_directory::db::{establish_connection_pool, run_migrations};
use tireshop_directory::domain::shop::{NewShop, ShopCategory, ShopStatus};
use tireshop_directory::domain::types::{CityName, ShopName, TypeConstraintError};
use tireshop_directory::models::config::ServerConfig;
use tireshop_directory::repository::{DieselRepository, ShopListQuery, ShopReader, ShopWriter};

const CITIES: [&str; 6] = ["Reno", "Sparks", "Carson City", "Fresno", "Boise", "Tacoma"];
const BRANDS: [&str; 8] = [
    "Tread", "Rubber", "Axle", "Rim", "Lug", "Traction", "Roadside", "Sidewall",
];
const SUFFIXES: [&str; 3] = ["Works", "Depot", "Garage"];

/// Deterministic spread of names, categories, moderation states and dates.
fn demo_shops(now: NaiveDateTime) -> Result<Vec<NewShop>, TypeConstraintError> {
    let mut shops = Vec::new();
    for (index, city) in CITIES.iter().enumerate() {
        for (offset, brand) in BRANDS.iter().enumerate() {
            let n = index * BRANDS.len() + offset;
            let category = ShopCategory::ALL[n % ShopCategory::ALL.len()];
            let status = match n % 7 {
                0 => ShopStatus::Pending,
                1 => ShopStatus::Suspended,
                _ => ShopStatus::Active,
            };
            let suffix = SUFFIXES[n % SUFFIXES.len()];
            let days = i64::try_from(n).unwrap_or_default() * 3;

            shops.push(NewShop::new(
                ShopName::new(format!("{brand} {suffix} {city}"))?,
                CityName::new(*city)?,
                category,
                status,
                n % 5 != 0,
                now - Duration::days(days),
            ));
        }
    }
    Ok(shops)
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let server_config = match ServerConfig::load(&app_env) {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&pool) {
        log::error!("Failed to run migrations: {e}");
        std::process::exit(1);
    }

    let repo = DieselRepository::new(pool);

    match repo.list_shops(ShopListQuery::new().paginate(1, 1)) {
        Ok((0, _)) => {}
        Ok((total, _)) => {
            log::info!("Directory already holds {total} shops, nothing to seed");
            return;
        }
        Err(e) => {
            log::error!("Failed to count shops: {e}");
            std::process::exit(1);
        }
    }

    let shops = match demo_shops(Utc::now().naive_utc()) {
        Ok(shops) => shops,
        Err(e) => {
            log::error!("Failed to build demo shops: {e}");
            std::process::exit(1);
        }
    };

    match repo.create_shops(&shops) {
        Ok(inserted) => log::info!("Inserted {inserted} demo shops"),
        Err(e) => {
            log::error!("Failed to insert demo shops: {e}");
            std::process::exit(1);
        }
    }
}
