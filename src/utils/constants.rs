/// Default source file names inside the data directory
pub const DEFAULT_DATA_DIR: &str = "data";
pub const FLIGHTS_FILE: &str = "Flight Level Data.csv";
pub const PNR_FILE: &str = "PNR Flight Level Data.csv";
pub const REMARKS_FILE: &str = "PNR Remark Level Data.csv";
pub const BAGS_FILE: &str = "Bag Level Data.csv";
pub const AIRPORTS_FILE: &str = "Airports Data.csv";

/// Output defaults
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_OUTPUT_STEM: &str = "flight_difficulty_scores";

/// Table names used in diagnostics
pub const FLIGHTS_TABLE: &str = "flights";
pub const PNR_TABLE: &str = "pnr";
pub const REMARKS_TABLE: &str = "remarks";
pub const BAGS_TABLE: &str = "bags";
pub const AIRPORTS_TABLE: &str = "airports";

/// Source column names
pub const COL_FLIGHT_NUMBER: &str = "flight_number";
pub const COL_DEPARTURE_DATE: &str = "scheduled_departure_date_local";
pub const COL_SCHEDULED_DEPARTURE: &str = "scheduled_departure_datetime_local";
pub const COL_ACTUAL_DEPARTURE: &str = "actual_departure_datetime_local";
pub const COL_SCHEDULED_GROUND_TIME: &str = "scheduled_ground_time_minutes";
pub const COL_MINIMUM_TURN: &str = "minimum_turn_minutes";
pub const COL_PNR_CREATION_DATE: &str = "pnr_creation_date";
pub const COL_BAG_TYPE: &str = "bag_type";
pub const COL_AIRPORT_IATA: &str = "airport_iata_code";
pub const COL_COUNTRY_CODE: &str = "iso_country_code";

/// Passenger count columns, shared by the PNR source and the output
pub const COL_TOTAL_PAX: &str = "total_pax";
pub const COL_LAP_CHILD: &str = "lap_child_count";
pub const COL_IS_CHILD: &str = "is_child";
pub const COL_BASIC_ECONOMY: &str = "basic_economy_pax";
pub const COL_STROLLER: &str = "is_stroller_user";

/// Derived output column names
pub const COL_DEPARTURE_DELAY: &str = "departure_delay";
pub const COL_GROUND_TIME_STRESS: &str = "ground_time_stress";
pub const COL_TRANSFER_RATIO: &str = "transfer_ratio";
pub const COL_SSR_COUNT: &str = "ssr_count";
pub const COL_DIFFICULTY_SCORE: &str = "difficulty_score";
pub const COL_RANK: &str = "rank";
pub const COL_CLASS: &str = "class";

/// Bag types feeding the transfer ratio
pub const BAG_TYPE_TRANSFER: &str = "Transfer";
pub const BAG_TYPE_CHECKED: &str = "Checked";

/// Smoothing term in the transfer ratio denominator
pub const TRANSFER_RATIO_SMOOTHING: f64 = 1.0;

/// Difficulty score weights
pub const DELAY_DIVISOR: f64 = 10.0;
pub const NEGATIVE_STRESS_PENALTY: f64 = 5.0;
pub const PASSENGER_DIVISOR: f64 = 100.0;
pub const SSR_WEIGHT: f64 = 2.0;
pub const TRANSFER_RATIO_WEIGHT: f64 = 10.0;

/// Parquet compression options
pub const COMPRESSION_SNAPPY: &str = "snappy";
pub const COMPRESSION_GZIP: &str = "gzip";
pub const COMPRESSION_LZ4: &str = "lz4";
pub const COMPRESSION_ZSTD: &str = "zstd";
pub const COMPRESSION_NONE: &str = "none";

/// Environment prefix for configuration overrides
pub const ENV_PREFIX: &str = "FLIGHT_DIFFICULTY";
