//! Per-cell display state of a South Indian chart.
//!
//! One [`CellView`] per sign, in [`SOUTH_INDIAN_LAYOUT`] order, carrying
//! everything a renderer draws inside that cell. Symbols and colours are
//! the renderer's business.

use kundali_base::{
    ALL_RASHIS, Dignity, Graha, GridCell, HouseClass, ReferenceData, SOUTH_INDIAN_LAYOUT,
};
use serde::Serialize;

use crate::chart::{Chart, ChartKind};

/// A graha drawn inside a cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occupant {
    pub graha: Graha,
    pub degree: u8,
    pub minute: u8,
    pub retrograde: bool,
    pub dignity: Option<Dignity>,
}

/// Display state of one sign cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellView {
    pub cell: GridCell,
    pub sign_index: u8,
    pub sign_name: String,
    pub localized_sign_name: String,
    /// House number relative to the chart anchor, if it is known.
    pub house: Option<u8>,
    /// Only birth charts mark an ascendant cell.
    pub is_ascendant: bool,
    pub class: HouseClass,
    /// Whether the selected graha aspects this sign.
    pub aspected: bool,
    pub occupants: Vec<Occupant>,
    /// Dignities in this sign of grahas that do not occupy it.
    pub remaining_relations: Vec<(Graha, Dignity)>,
}

/// Build the twelve cell views for `chart`.
pub fn chart_cells(
    chart: &Chart,
    reference: &ReferenceData,
    selected: Option<Graha>,
) -> Vec<CellView> {
    SOUTH_INDIAN_LAYOUT
        .iter()
        .map(|layout| {
            let sign_index = layout.sign_index;
            let rashi = ALL_RASHIS[sign_index as usize];
            let house = chart.house_of(sign_index);
            let occupants: Vec<Occupant> = chart
                .planets_in_sign(sign_index)
                .map(|p| Occupant {
                    graha: p.graha,
                    degree: p.sign.degree,
                    minute: p.sign.minute,
                    retrograde: p.retrograde,
                    dignity: reference.dignity(rashi, p.graha),
                })
                .collect();
            let remaining_relations = reference
                .dignities()
                .relations_in(rashi)
                .filter(|(g, _)| !occupants.iter().any(|o| o.graha == *g))
                .collect();

            CellView {
                cell: layout.cell,
                sign_index,
                sign_name: reference.sign_name(sign_index).to_string(),
                localized_sign_name: reference.localized_sign_name(sign_index).to_string(),
                house,
                is_ascendant: chart.kind() == ChartKind::Birth && house == Some(1),
                class: house.map(HouseClass::of).unwrap_or_default(),
                aspected: chart.is_aspected(sign_index, selected, reference),
                occupants,
                remaining_relations,
            }
        })
        .collect()
}
