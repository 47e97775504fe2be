use std::ops::AddAssign;

use super::FlightKey;

/// One row of the PNR flight summary
#[derive(Debug, Clone, PartialEq)]
pub struct PnrRecord {
    pub key: FlightKey,
    pub passengers: PassengerLoad,
}

/// Passenger counts, either for one PNR row or summed over a flight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassengerLoad {
    pub total_pax: u32,
    pub lap_child_count: u32,
    pub is_child: u32,
    pub basic_economy_pax: u32,
    pub is_stroller_user: u32,
}

/// Sums saturate at `u32::MAX` rather than wrapping
impl AddAssign for PassengerLoad {
    fn add_assign(&mut self, other: Self) {
        self.total_pax = self.total_pax.saturating_add(other.total_pax);
        self.lap_child_count = self.lap_child_count.saturating_add(other.lap_child_count);
        self.is_child = self.is_child.saturating_add(other.is_child);
        self.basic_economy_pax = self.basic_economy_pax.saturating_add(other.basic_economy_pax);
        self.is_stroller_user = self.is_stroller_user.saturating_add(other.is_stroller_user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assign_sums_each_count() {
        let mut load = PassengerLoad {
            total_pax: 200,
            is_child: 1,
            ..Default::default()
        };
        load += PassengerLoad {
            total_pax: 50,
            is_stroller_user: 1,
            ..Default::default()
        };

        assert_eq!(load.total_pax, 250);
        assert_eq!(load.is_child, 1);
        assert_eq!(load.is_stroller_user, 1);
    }

    #[test]
    fn test_add_assign_saturates() {
        let mut load = PassengerLoad {
            total_pax: u32::MAX - 1,
            ..Default::default()
        };
        load += PassengerLoad {
            total_pax: 10,
            lap_child_count: 2,
            ..Default::default()
        };

        assert_eq!(load.total_pax, u32::MAX);
        assert_eq!(load.lap_child_count, 2);
    }
}
