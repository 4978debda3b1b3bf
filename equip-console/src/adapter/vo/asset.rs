use chrono::NaiveDate;
use equip_common::{strip_list_text, Asset};
use serde::Serialize;

const DATE_DISPLAY: &str = "%Y-%m-%d";
const MISSING: &str = "N/A";

/// Summary columns for one listing row.
#[derive(Clone, Default, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRowVo {
    pub id: i64,
    pub label_id: String,
    pub component: String,
    pub equipment: String,
    pub sector: String,
    pub state_label: String,
}

/// Expanded detail panel for one row. List-like fields arrive stripped of
/// their serialization syntax; missing dates render as "N/A".
#[derive(Clone, Default, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDetailVo {
    pub plant_tag: String,
    pub tag_tgd: String,
    pub tag_fp: String,
    pub brand: String,
    pub model: String,
    pub kind: String,
    pub function: String,
    pub criticality: String,
    pub routes: String,
    pub supplies: String,
    pub element: String,
    pub component: String,
    pub lubricant_type: String,
    pub lubricant: String,
    pub capacity: String,
    pub oil_analysis: String,
    pub admission_date: String,
    pub egress_date: String,
    pub review: String,
    pub observations: Option<String>,
}

fn display_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format(DATE_DISPLAY).to_string(),
        None => MISSING.to_string(),
    }
}

impl From<&Asset> for AssetRowVo {
    fn from(asset: &Asset) -> Self {
        Self {
            id: asset.id,
            label_id: asset.label_id.clone(),
            component: asset.component.clone(),
            equipment: asset.equipment.clone(),
            sector: asset.sector.clone(),
            state_label: if asset.state { "Active" } else { "Inactive" }.to_string(),
        }
    }
}

impl From<&Asset> for AssetDetailVo {
    fn from(asset: &Asset) -> Self {
        Self {
            plant_tag: asset.plant_tag.clone().unwrap_or_default(),
            tag_tgd: asset.tag_tgd.clone().unwrap_or_default(),
            tag_fp: asset.tag_fp.clone().unwrap_or_default(),
            brand: asset.brand.clone(),
            model: asset.model.clone(),
            kind: asset.kind.clone(),
            function: asset.function.clone(),
            criticality: asset.criticality.clone(),
            routes: strip_list_text(&asset.routes),
            supplies: strip_list_text(&asset.supplies),
            element: asset.element.clone(),
            component: asset.component.clone(),
            lubricant_type: asset.lubricant_type.clone(),
            lubricant: asset.lubricant.clone(),
            capacity: format!("{} {}", asset.capacity, asset.measure_unit)
                .trim()
                .to_string(),
            oil_analysis: if asset.oil_analysis { "Yes" } else { "No" }.to_string(),
            admission_date: display_date(asset.admission_date),
            egress_date: display_date(asset.egress_date),
            review: asset.review.clone(),
            observations: asset.observations.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Asset {
        let mut asset = Asset::new();
        asset.id = 1;
        asset.label_id = "EQ-001".to_string();
        asset.state = true;
        asset.routes = r#"["R1","R2"]"#.to_string();
        asset.capacity = 20.0;
        asset.measure_unit = "L".to_string();
        asset.oil_analysis = false;
        asset.admission_date = NaiveDate::from_ymd_opt(2021, 6, 1);
        asset
    }

    #[test]
    fn row_carries_state_label() {
        let row = AssetRowVo::from(&sample());
        assert_eq!(row.state_label, "Active");

        let mut inactive = sample();
        inactive.state = false;
        assert_eq!(AssetRowVo::from(&inactive).state_label, "Inactive");
    }

    #[test]
    fn detail_strips_lists_and_formats_dates() {
        let detail = AssetDetailVo::from(&sample());
        assert_eq!(detail.routes, "R1,R2");
        assert_eq!(detail.capacity, "20 L");
        assert_eq!(detail.oil_analysis, "No");
        assert_eq!(detail.admission_date, "2021-06-01");
        assert_eq!(detail.egress_date, "N/A");
        assert_eq!(detail.observations, None);
    }
}
