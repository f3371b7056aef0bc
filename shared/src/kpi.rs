//! Header KPI readings.

use rand::Rng;

/// One reading of the header KPI cards.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiSnapshot {
    /// Uploads over the last week.
    pub uploads: u32,
    /// Storage in use, in GB.
    pub storage_gb: f64,
    /// Users online.
    pub active_users: u32,
}

/// A formatted KPI card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiCard {
    /// Element id of the card value, kept stable for host styling.
    pub id: &'static str,
    /// Card title.
    pub title: &'static str,
    /// Big number.
    pub value: String,
    /// Caption under the value.
    pub note: &'static str,
}

impl KpiCard {
    /// Element id of the caption on host pages that carry their own cards.
    pub fn note_id(&self) -> String {
        format!("{}Note", self.id)
    }
}

impl KpiSnapshot {
    /// Value element ids, in card order.
    pub const VALUE_IDS: [&'static str; 3] = ["kpiUploads", "kpiStorage", "kpiActiveUsers"];

    /// Draw a plausible reading.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            uploads: 247 + rng.gen_range(0..10),
            storage_gb: 12.4 + rng.gen_range(0.0..0.5),
            active_users: 45 + rng.gen_range(0..5),
        }
    }

    /// Cards in display order.
    pub fn cards(&self) -> [KpiCard; 3] {
        [
            KpiCard {
                id: Self::VALUE_IDS[0],
                title: "Uploads",
                value: self.uploads.to_string(),
                note: "Last 7 days",
            },
            KpiCard {
                id: Self::VALUE_IDS[1],
                title: "Storage",
                value: format!("{:.1} GB", self.storage_gb),
                note: "Used of 100 GB",
            },
            KpiCard {
                id: Self::VALUE_IDS[2],
                title: "Active users",
                value: self.active_users.to_string(),
                note: "Online now",
            },
        ]
    }
}
