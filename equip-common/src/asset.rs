use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One equipment record as returned by the remote service.
///
/// Field names on the wire are camelCase; the service assigns `id` and it is
/// never changed by the client.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct Asset {
    pub id: i64,
    pub label_id: String,
    pub plant_tag: Option<String>,
    #[serde(rename = "tagTGD")]
    pub tag_tgd: Option<String>,
    #[serde(rename = "tagFP")]
    pub tag_fp: Option<String>,
    #[serde(rename = "tagTGDBefore")]
    pub tag_tgd_before: Option<String>,
    pub component: String,
    pub equipment: String,
    pub sector: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub brand: String,
    pub model: String,
    pub element: String,
    pub function: String,
    pub criticality: String,
    pub state: bool,
    pub location: String,
    pub routes: String,
    pub supplies: String,
    pub lubricant_type: String,
    pub lubricant: String,
    pub capacity: f64,
    pub measure_unit: String,
    pub oil_analysis: bool,
    pub suggested_quantity: String,
    pub admission_date: Option<NaiveDate>,
    pub egress_date: Option<NaiveDate>,
    pub date: Option<NaiveDate>,
    pub review: String,
    pub observations: Option<String>,
}

/// The editable subset of [`Asset`]. This is the exact `PUT /equipment`
/// payload; the record is identified by the `id` body field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetUpdateCmd {
    pub id: i64,
    pub function: String,
    pub location: String,
    pub criticality: String,
    pub suggested_quantity: String,
    pub egress_date: Option<NaiveDate>,
    pub oil_analysis: bool,
    pub observations: Option<String>,
}

impl Asset {
    pub fn new() -> Asset {
        Asset::default()
    }

    /// Deep copy of the editable fields, in command form.
    pub fn update_cmd(&self) -> AssetUpdateCmd {
        AssetUpdateCmd {
            id: self.id,
            function: self.function.clone(),
            location: self.location.clone(),
            criticality: self.criticality.clone(),
            suggested_quantity: self.suggested_quantity.clone(),
            egress_date: self.egress_date,
            oil_analysis: self.oil_analysis,
            observations: self.observations.clone(),
        }
    }

    /// Applies an update command to this record. Only the editable subset is
    /// touched; everything else stays as loaded.
    pub fn apply_update(&mut self, cmd: &AssetUpdateCmd) {
        self.function = cmd.function.clone();
        self.location = cmd.location.clone();
        self.criticality = cmd.criticality.clone();
        self.suggested_quantity = cmd.suggested_quantity.clone();
        self.egress_date = cmd.egress_date;
        self.oil_analysis = cmd.oil_analysis;
        self.observations = cmd.observations.clone();
    }
}
