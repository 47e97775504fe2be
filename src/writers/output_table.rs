use crate::models::ScoredFlight;
use crate::processors::ScoredTable;
use crate::utils::constants::{
    COL_BASIC_ECONOMY, COL_CLASS, COL_DEPARTURE_DELAY, COL_DIFFICULTY_SCORE,
    COL_GROUND_TIME_STRESS, COL_IS_CHILD, COL_LAP_CHILD, COL_RANK, COL_SSR_COUNT, COL_STROLLER,
    COL_TOTAL_PAX, COL_TRANSFER_RATIO,
};
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    Text(Vec<String>),
    Float(Vec<f64>),
    Count(Vec<u32>),
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Text(v) => v.len(),
            ColumnValues::Float(v) => v.len(),
            ColumnValues::Count(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell as written to CSV
    pub fn format_cell(&self, row: usize) -> String {
        match self {
            ColumnValues::Text(v) => v[row].clone(),
            ColumnValues::Float(v) => v[row].to_string(),
            ColumnValues::Count(v) => v[row].to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputColumn {
    pub name: String,
    pub values: ColumnValues,
}

impl OutputColumn {
    fn new(name: impl Into<String>, values: ColumnValues) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Column-oriented view of the scored table, shared by every output format.
///
/// Flight columns come first in source order, then the derived columns.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTable {
    pub columns: Vec<OutputColumn>,
}

impl OutputTable {
    pub fn from_scored(table: &ScoredTable) -> Self {
        let flights = &table.flights;
        let float = |f: fn(&ScoredFlight) -> f64| ColumnValues::Float(flights.iter().map(f).collect());
        let count = |f: fn(&ScoredFlight) -> u32| ColumnValues::Count(flights.iter().map(f).collect());

        let mut derived = vec![
            OutputColumn::new(COL_DEPARTURE_DELAY, float(|f| f.joined.departure_delay)),
            OutputColumn::new(COL_GROUND_TIME_STRESS, float(|f| f.joined.ground_time_stress)),
            OutputColumn::new(COL_TOTAL_PAX, count(|f| f.joined.passengers.total_pax)),
            OutputColumn::new(COL_LAP_CHILD, count(|f| f.joined.passengers.lap_child_count)),
            OutputColumn::new(COL_IS_CHILD, count(|f| f.joined.passengers.is_child)),
            OutputColumn::new(COL_BASIC_ECONOMY, count(|f| f.joined.passengers.basic_economy_pax)),
            OutputColumn::new(COL_STROLLER, count(|f| f.joined.passengers.is_stroller_user)),
        ];

        for (position, bag_type) in table.bag_types.iter().enumerate() {
            derived.push(OutputColumn::new(
                bag_type.clone(),
                ColumnValues::Count(
                    flights
                        .iter()
                        .map(|f| f.joined.bag_counts.get(position).copied().unwrap_or(0))
                        .collect(),
                ),
            ));
        }

        derived.extend([
            OutputColumn::new(COL_TRANSFER_RATIO, float(|f| f.joined.transfer_ratio)),
            OutputColumn::new(COL_SSR_COUNT, count(|f| f.joined.ssr_count)),
            OutputColumn::new(COL_DIFFICULTY_SCORE, float(|f| f.difficulty_score)),
            OutputColumn::new(COL_RANK, count(|f| f.rank)),
            OutputColumn::new(
                COL_CLASS,
                ColumnValues::Text(flights.iter().map(|f| f.class.to_string()).collect()),
            ),
        ]);

        let mut columns = Vec::with_capacity(table.headers.len() + derived.len());
        for (index, header) in table.headers.iter().enumerate() {
            if derived.iter().any(|c| &c.name == header) {
                warn!(column = %header, "Flight column replaced by derived column of the same name");
                continue;
            }
            columns.push(OutputColumn::new(
                header.clone(),
                ColumnValues::Text(
                    flights
                        .iter()
                        .map(|f| f.joined.flight.columns.get(index).cloned().unwrap_or_default())
                        .collect(),
                ),
            ));
        }
        columns.extend(derived);

        Self { columns }
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }
}
