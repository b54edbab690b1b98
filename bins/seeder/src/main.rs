//! Database seeder for Nagorik development and bootstrap.
//!
//! Seeds the certificate-type catalog and a bootstrap administrator so a
//! fresh office installation is usable immediately.
//!
//! Usage: cargo run --bin seeder

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use nagorik_core::auth::hash_password;
use nagorik_core::certificate::CertificateKind;
use nagorik_db::AdministratorRepository;
use nagorik_db::entities::certificate_types;

/// Bootstrap administrator username.
const BOOTSTRAP_ADMIN: &str = "registrar";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = nagorik_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding certificate types...");
    seed_certificate_types(&db).await;

    println!("Seeding bootstrap administrator...");
    seed_administrator(&db).await;

    println!("Seeding complete!");
}

/// Seeds the standard certificate-type catalog.
async fn seed_certificate_types(db: &DatabaseConnection) {
    let catalog: &[(CertificateKind, &str, &str, i64)] = &[
        (
            CertificateKind::General,
            "Citizenship Certificate",
            "নাগরিকত্ব সনদ",
            100,
        ),
        (
            CertificateKind::General,
            "Character Certificate",
            "চারিত্রিক সনদ",
            50,
        ),
        (
            CertificateKind::TradeLicense,
            "Trade License",
            "ট্রেড লাইসেন্স",
            500,
        ),
        (
            CertificateKind::Succession,
            "Succession Certificate",
            "ওয়ারিশ সনদ",
            200,
        ),
    ];

    for (kind, name_en, name_bn, fee) in catalog {
        let exists = certificate_types::Entity::find()
            .filter(certificate_types::Column::NameEn.eq(*name_en))
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some();

        if exists {
            println!("  {name_en} already exists, skipping...");
            continue;
        }

        let now = Utc::now();
        let cert_type = certificate_types::ActiveModel {
            id: Set(Uuid::now_v7()),
            kind: Set(kind.as_str().to_string()),
            name_en: Set((*name_en).to_string()),
            name_bn: Set((*name_bn).to_string()),
            fee: Set(Decimal::new(*fee, 0)),
            template: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        if let Err(e) = cert_type.insert(db).await {
            eprintln!("Failed to insert certificate type {name_en}: {e}");
        } else {
            println!("  Created certificate type: {name_en}");
        }
    }
}

/// Seeds the bootstrap administrator account.
async fn seed_administrator(db: &DatabaseConnection) {
    let repo = AdministratorRepository::new(db.clone());

    let exists = repo
        .find_by_username(BOOTSTRAP_ADMIN)
        .await
        .ok()
        .flatten()
        .is_some();

    if exists {
        println!("  Bootstrap administrator already exists, skipping...");
        return;
    }

    let password =
        std::env::var("BOOTSTRAP_ADMIN_PASSWORD").unwrap_or_else(|_| "change-me".to_string());
    let password_hash = hash_password(&password).expect("Failed to hash bootstrap password");

    match repo
        .create(BOOTSTRAP_ADMIN, &password_hash, "Office Registrar")
        .await
    {
        Ok(_) => println!("  Created administrator: {BOOTSTRAP_ADMIN}"),
        Err(e) => eprintln!("Failed to insert bootstrap administrator: {e}"),
    }
}
