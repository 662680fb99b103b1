//! Runs the three advisor panels on sample submissions and prints the rendered results.
//!
//! `ADVISOR_SEED=7 cargo run --bin advisor_demo` gives repeatable output.

use std::sync::Arc;

use luxe_advisor::submission::{AuthenticitySubmission, ResaleSubmission, StylingSubmission};
use luxe_advisor::{Advisor, AdvisorConfig, AdvisorError, Catalogs, RandomFactory};

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_target(false).init();

    let cfg = AdvisorConfig::from_env()?;
    let catalogs = Catalogs::load(cfg.catalogs.dir.as_deref())?;
    let advisor = Advisor::new(Arc::new(catalogs), cfg.advisor.mode)
        .with_ai_available(cfg.ai.available());
    let rng = RandomFactory::new(cfg.advisor.seed);

    let checks = [
        AuthenticitySubmission {
            title: "Classic Flap Bag".into(),
            brand: "Chanel".into(),
            description: "Black lambskin, gold hardware, chain strap with leather woven through, burgundy interior".into(),
            condition: "Excellent".into(),
        },
        AuthenticitySubmission {
            title: "Mystery Tote".into(),
            brand: "Unknown Brand".into(),
            description: "Canvas tote with leather trim".into(),
            condition: "Fair".into(),
        },
    ];
    section("Authenticity");
    for sub in &checks {
        print_panel(advisor.authenticity(sub, &mut rng.fresh()));
    }

    let outfits = [
        StylingSubmission {
            item_name: "Gucci Blazer".into(),
            context: Some("office meeting in winter".into()),
        },
        StylingSubmission {
            item_name: "Suede Ankle Boots".into(),
            context: None,
        },
    ];
    section("Styling");
    for sub in &outfits {
        print_panel(advisor.styling(sub, &mut rng.fresh()));
    }

    let listings = [
        ResaleSubmission {
            brand: "Louis Vuitton".into(),
            item_name: "Speedy".into(),
            condition: "Good".into(),
        },
        ResaleSubmission {
            brand: "Hermes".into(),
            item_name: "Kelly 28".into(),
            condition: "Very good".into(),
        },
    ];
    section("Resale");
    for sub in &listings {
        print_panel(advisor.resale(sub, &mut rng.fresh()));
    }

    Ok(())
}

fn section(title: &str) {
    println!("\n=== {title} ===");
}

fn print_panel<T: std::fmt::Display>(result: Result<T, AdvisorError>) {
    match result {
        Ok(panel) => println!("{panel}\n"),
        Err(e) => println!("! {e}\n"),
    }
}
