// src/bin/seed.rs
// DOCUMENTATION: Populates a running places-api with sample places
// PURPOSE: Local development data without hand-writing requests

use dotenv::dotenv;
use rand::seq::SliceRandom;
use rand::Rng;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::process;
use std::time::{Duration, Instant};

// --- ANSI colors ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

const NAME_PREFIXES: &[&str] = &[
    "Golden", "Blue", "Old Town", "Riverside", "Parque", "Central", "Sunset", "Green Valley",
    "North Star", "Casa", "Maple", "Harbor",
];

const NAME_KINDS: &[&str] = &[
    "Bistro", "Market", "Gardens", "Café", "Books", "Brewing", "Plaza", "Gallery", "Bakery",
    "Studios", "Diner", "Lounge",
];

const NAME_SUFFIXES: &[&str] = &["", "", "", " & Co", " Group", " LLC", " Inc"];

const CITIES: &[(&str, &str)] = &[
    ("Springfield", "IL"),
    ("Portland", "OR"),
    ("Austin", "TX"),
    ("Madison", "WI"),
    ("Savannah", "GA"),
    ("Boulder", "CO"),
    ("Burlington", "VT"),
    ("São Paulo", "SP"),
    ("Curitiba", "PR"),
    ("Recife", "PE"),
];

#[derive(Serialize, Debug)]
struct PlacePayload {
    name: String,
    city: String,
    state: String,
}

#[derive(Deserialize, Debug)]
struct CreatedPlace {
    id: String,
    name: String,
    slug: String,
}

/// Sample place with a company-like name
fn sample_place<R: Rng>(rng: &mut R) -> PlacePayload {
    let prefix = NAME_PREFIXES.choose(rng).copied().unwrap_or("Central");
    let kind = NAME_KINDS.choose(rng).copied().unwrap_or("Market");
    let suffix = NAME_SUFFIXES.choose(rng).copied().unwrap_or("");
    let (city, state) = CITIES.choose(rng).copied().unwrap_or(("Springfield", "IL"));

    PlacePayload {
        name: format!("{} {}{}", prefix, kind, suffix),
        city: city.to_string(),
        state: state.to_string(),
    }
}

struct Seeder {
    base_url: String,
    client: Client,
}

impl Seeder {
    fn new(base_url: String) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self { base_url, client })
    }

    async fn check_service_health(&self) -> bool {
        match self.client.get(format!("{}/health", self.base_url)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn create_place(&self, payload: &PlacePayload) -> anyhow::Result<CreatedPlace> {
        let response = self
            .client
            .post(format!("{}/places", self.base_url))
            .json(payload)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json::<CreatedPlace>().await?)
        } else {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("HTTP {} - {}", status, body)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let base_url = env::var("PLACES_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8002".to_string());
    let count: usize = env::var("SEED_COUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);

    let seeder = Seeder::new(base_url.trim_end_matches('/').to_string())?;

    println!("\n{}Checking service status...{}", CYAN, RESET);
    if !seeder.check_service_health().await {
        println!("{}Service unavailable at {}{}", RED, seeder.base_url, RESET);
        println!("{}Please ensure places-api is running (cargo run){}", YELLOW, RESET);
        process::exit(1);
    }
    println!("{}Service available{}\n", GREEN, RESET);

    println!("{}Seeding {} places...{}\n", BOLD, count, RESET);

    let mut rng = rand::thread_rng();
    let started = Instant::now();
    let mut created = 0;
    let mut failed = 0;

    for i in 0..count {
        let payload = sample_place(&mut rng);

        match seeder.create_place(&payload).await {
            Ok(place) => {
                created += 1;
                println!(
                    "{}[{}/{}] {} ({}) -> {}{}",
                    GREEN,
                    i + 1,
                    count,
                    place.name,
                    place.slug,
                    place.id,
                    RESET
                );
            }
            Err(e) => {
                failed += 1;
                println!(
                    "{}[{}/{}] Failed to create {}: {}{}",
                    RED,
                    i + 1,
                    count,
                    payload.name,
                    e,
                    RESET
                );
            }
        }
    }

    println!("\n{}Summary{}", BOLD, RESET);
    println!("  • Created: {}{}{}", GREEN, created, RESET);
    println!("  • Failed: {}{}{}", if failed > 0 { RED } else { GREEN }, failed, RESET);
    println!("  • Duration: {:.1}s", started.elapsed().as_secs_f64());

    if failed > 0 {
        process::exit(2);
    }
    Ok(())
}
