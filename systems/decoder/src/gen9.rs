use pidlab_core::{
    AbilityPermission, DecodeError, EncounterArea, EncounterSlot, EncounterTera, GameVersion,
    GemType, Gender, Moveset, Shiny, WeightedSlot,
};
use tracing::trace;

use crate::{decode_all, read_i16, read_u16, BinLinker, RecordLayout};

/// Bytes preceding the slot table of an area entry: location and cross reference.
pub const AREA_HEADER_LEN: usize = 4;

/// One 8-byte wild slot of an area entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotRecord {
    /// National dex species id.
    pub species: u16,
    /// Form index.
    pub form: u8,
    /// Fixed gender, `None` when random.
    pub gender: Option<Gender>,
    /// Lowest level.
    pub level_min: u8,
    /// Highest level.
    pub level_max: u8,
    /// Time-of-day flags.
    pub time_of_day: u8,
}

impl RecordLayout for SlotRecord {
    const WIDTH: usize = 8;

    fn read(record: &[u8]) -> Result<Self, DecodeError> {
        let code = record[3] as i8;
        let gender = match code {
            -1 => None,
            other => Some(Gender::from_code(other).ok_or(DecodeError::InvalidField {
                field: "gender",
                value: i32::from(other),
            })?),
        };
        Ok(Self {
            species: read_u16(record, 0),
            form: record[2],
            gender,
            level_min: record[4],
            level_max: record[5],
            time_of_day: record[6],
        })
    }
}

/// Decodes one area entry recorded for `version`.
pub fn decode_area9(entry: &[u8], version: GameVersion) -> Result<EncounterArea, DecodeError> {
    if entry.len() < AREA_HEADER_LEN {
        return Err(DecodeError::Truncated {
            needed: AREA_HEADER_LEN,
            len: entry.len(),
        });
    }
    let location = read_u16(entry, 0);
    let cross_from = read_u16(entry, 2);
    let slots = decode_all::<SlotRecord>(&entry[AREA_HEADER_LEN..])?
        .into_iter()
        .map(|record| {
            EncounterSlot::new(
                record.species,
                record.level_min,
                record.level_max,
                location,
                version,
            )
            .with_form(record.form)
            .with_gender(record.gender)
            .with_time_of_day(record.time_of_day)
        })
        .collect();
    Ok(EncounterArea::new(location, cross_from, version, slots))
}

/// Decodes every area entry of a container.
pub fn decode_areas9(
    linker: &BinLinker<'_>,
    version: GameVersion,
) -> Result<Vec<EncounterArea>, DecodeError> {
    let areas = linker
        .iter()
        .map(|entry| decode_area9(entry, version))
        .collect::<Result<Vec<_>, _>>()?;
    trace!(?version, count = areas.len(), "decoded area container");
    Ok(areas)
}

impl RecordLayout for EncounterTera {
    const WIDTH: usize = 0x18;

    fn read(record: &[u8]) -> Result<Self, DecodeError> {
        let gender = match record[0x03] {
            0 => None,
            stored => Some(Gender::from_code((stored - 1) as i8).ok_or(
                DecodeError::InvalidField {
                    field: "gender",
                    value: i32::from(stored),
                },
            )?),
        };
        let ability =
            AbilityPermission::from_code(record[0x04]).ok_or(DecodeError::InvalidField {
                field: "ability",
                value: i32::from(record[0x04]),
            })?;
        let shiny = Shiny::from_code(record[0x06]).ok_or(DecodeError::InvalidField {
            field: "shiny",
            value: i32::from(record[0x06]),
        })?;
        Ok(Self {
            species: read_u16(record, 0x00),
            form: record[0x02],
            gender,
            ability,
            flawless_iv_count: record[0x05],
            shiny,
            level: record[0x07],
            moves: Moveset::new([
                read_u16(record, 0x08),
                read_u16(record, 0x0A),
                read_u16(record, 0x0C),
                read_u16(record, 0x0E),
            ]),
            tera_type: GemType::new(record[0x10]),
            index: record[0x11],
            stars: record[0x12],
            rate: WeightedSlot::new(
                u16::from(record[0x13]),
                read_i16(record, 0x14),
                read_i16(record, 0x16),
            ),
        })
    }
}

/// Decodes a raid table of 24-byte records.
pub fn decode_tera9(bytes: &[u8]) -> Result<Vec<EncounterTera>, DecodeError> {
    decode_all::<EncounterTera>(bytes)
}
