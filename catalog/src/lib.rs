#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Read-only encounter template catalog.
//!
//! The catalog is assembled once from the constant tables and the bundled
//! binary tables, optionally published process-wide with [`install`], and
//! never mutated afterwards. Read access goes through the [`query`] module.

mod tables;

use std::sync::OnceLock;

use pidlab_core::{DecodeError, EncounterArea, EncounterTemplate, EncounterTera, GameVersion};
use pidlab_system_decoder::{decode_areas9, decode_tera9, BinLinker};
use tracing::{info, warn};

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

/// Every template the engine knows about.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    areas: Vec<EncounterArea>,
    raids: Vec<EncounterTera>,
    fixed: Vec<EncounterTemplate>,
}

impl Catalog {
    /// Catalog holding only the templates compiled into the engine.
    #[must_use]
    pub fn with_constant_tables() -> Self {
        let fixed = tables::shadows()
            .into_iter()
            .map(EncounterTemplate::Shadow)
            .chain(tables::trades().into_iter().map(EncounterTemplate::Trade))
            .chain(tables::gifts().into_iter().map(EncounterTemplate::Gift))
            .collect();
        Self {
            areas: tables::areas(),
            raids: Vec::new(),
            fixed,
        }
    }

    /// Constant tables plus decoded binary tables.
    ///
    /// `areas` pairs each area container with the game it was shipped with;
    /// `raids` is a raid record table.
    pub fn load(areas: &[(GameVersion, &[u8])], raids: &[u8]) -> Result<Self, DecodeError> {
        let mut catalog = Self::with_constant_tables();
        for (version, bytes) in areas {
            let linker = BinLinker::parse(bytes)?;
            catalog.areas.extend(decode_areas9(&linker, *version)?);
        }
        catalog.raids = decode_tera9(raids)?;

        info!(
            areas = catalog.areas.len(),
            raids = catalog.raids.len(),
            fixed = catalog.fixed.len(),
            "loaded encounter catalog"
        );
        for (version, stars) in query::uncovered_tiers(&catalog) {
            warn!(?version, stars, "raid tier does not cover its rate total");
        }
        Ok(catalog)
    }
}

/// Publishes `catalog` process-wide; returns `false` when one is already installed.
pub fn install(catalog: Catalog) -> bool {
    GLOBAL.set(catalog).is_ok()
}

/// Process-wide catalog, falling back to the constant tables when none was installed.
pub fn global() -> &'static Catalog {
    GLOBAL.get_or_init(Catalog::with_constant_tables)
}

/// Read-only access to a [`Catalog`].
pub mod query {
    use pidlab_core::{
        Encounter, EncounterArea, EncounterTemplate, EncounterTera, GameVersion, BASE_RATE_TABLE,
    };
    use pidlab_system_weighted::{partitions, rate_total};

    use super::Catalog;

    const RAID_VERSIONS: [GameVersion; 2] = [GameVersion::Scarlet, GameVersion::Violet];

    /// Wild areas in load order.
    #[must_use]
    pub fn areas(catalog: &Catalog) -> &[EncounterArea] {
        &catalog.areas
    }

    /// Raid templates in table order.
    #[must_use]
    pub fn raids(catalog: &Catalog) -> &[EncounterTera] {
        &catalog.raids
    }

    /// Shadow, trade and gift templates.
    #[must_use]
    pub fn fixed_templates(catalog: &Catalog) -> &[EncounterTemplate] {
        &catalog.fixed
    }

    /// Areas recorded under `location` for a game of `version`.
    #[must_use]
    pub fn areas_at(catalog: &Catalog, location: u16, version: GameVersion) -> Vec<&EncounterArea> {
        catalog
            .areas
            .iter()
            .filter(|area| area.is_match_location(location) && area.version().contains(version))
            .collect()
    }

    /// Base-table raids of `stars`.
    #[must_use]
    pub fn raids_of_tier(catalog: &Catalog, stars: u8) -> Vec<&EncounterTera> {
        catalog
            .raids
            .iter()
            .filter(|raid| raid.stars == stars && !raid.is_distribution())
            .collect()
    }

    /// Every template that can produce `species`, as owned values.
    #[must_use]
    pub fn templates_for_species(catalog: &Catalog, species: u16) -> Vec<EncounterTemplate> {
        let slots = catalog
            .areas
            .iter()
            .flat_map(|area| area.slots())
            .filter(|slot| slot.species() == species)
            .map(|slot| EncounterTemplate::Slot(*slot));
        let raids = catalog
            .raids
            .iter()
            .filter(|raid| raid.species == species)
            .map(|raid| EncounterTemplate::Tera(*raid));
        let fixed = catalog
            .fixed
            .iter()
            .filter(|template| template.species() == species)
            .cloned();
        slots.chain(raids).chain(fixed).collect()
    }

    /// Tiers whose base raids do not tile the rate total of a version.
    #[must_use]
    pub fn uncovered_tiers(catalog: &Catalog) -> Vec<(GameVersion, u8)> {
        let mut uncovered = Vec::new();
        for version in RAID_VERSIONS {
            for stars in 1..=6 {
                let tier = raids_of_tier(catalog, stars);
                if tier.is_empty() {
                    continue;
                }
                let covered = rate_total(&BASE_RATE_TABLE, stars, version).is_some_and(|total| {
                    partitions(tier.iter().map(|raid| &raid.rate), total, version)
                });
                if !covered {
                    uncovered.push((version, stars));
                }
            }
        }
        uncovered
    }
}
