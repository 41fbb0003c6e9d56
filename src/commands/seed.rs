//! Seed command - Loads sample regions and articles.

use crate::config::Config;
use crate::domain::{ArticlePayload, Region, RegionInput};
use crate::errors::{AppError, AppResult};
use crate::infra::Database;
use crate::services::{ServiceContainer, Services};

/// Regions every seeded database has, as `(code, name)`.
pub const SEED_REGIONS: [(&str, &str); 4] = [
    ("AL", "Albania"),
    ("UK", "United Kingdom"),
    ("AU", "Austria"),
    ("US", "United States of America"),
];

/// Number of sample articles created on an empty database
pub const SEED_ARTICLE_COUNT: usize = 5;

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let services = Services::from_connection(db.get_connection());
    let created = seed(&services).await?;

    tracing::info!(articles_created = created, "Seeding completed");
    Ok(())
}

/// Ensure the sample regions exist and, when no article is published in
/// the first of them yet, create the sample articles.
///
/// Returns the number of articles created. Running it again is a no-op.
pub async fn seed(services: &dyn ServiceContainer) -> AppResult<usize> {
    let mut regions = Vec::with_capacity(SEED_REGIONS.len());
    for (code, name) in SEED_REGIONS {
        regions.push(services.regions().ensure_region(code, name).await?);
    }

    let (first_code, _) = SEED_REGIONS[0];
    if services.articles().has_articles_in_region(first_code).await? {
        tracing::info!("Sample articles already present, skipping");
        return Ok(0);
    }

    for index in 0..SEED_ARTICLE_COUNT {
        let linked: &[Region] = match index {
            0 => &regions[..2],
            i if i == SEED_ARTICLE_COUNT - 1 => &regions[2..],
            _ => &[],
        };

        let payload = ArticlePayload {
            title: Some("Fake Article".to_string()),
            content: Some("Fake Content".to_string()),
            regions: Some(
                linked
                    .iter()
                    .map(|region| RegionInput {
                        id: Some(region.id),
                        ..Default::default()
                    })
                    .collect(),
            ),
            ..Default::default()
        };

        services.articles().create_article(payload).await?;
    }

    Ok(SEED_ARTICLE_COUNT)
}
