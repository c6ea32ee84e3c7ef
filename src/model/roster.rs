use super::Driver;
use crate::ranking;

/// Drivers known to the application. A roster starts out `NotLoaded`, which
/// is distinct from a loaded source that happened to return no driver.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Roster {
    #[default]
    NotLoaded,
    Loaded(Vec<Driver>),
}

impl Roster {
    pub fn new() -> Self {
        Self::NotLoaded
    }

    /// Replace the roster content.
    pub fn load(&mut self, drivers: Vec<Driver>) {
        *self = Self::Loaded(drivers);
    }

    pub fn drivers(&self) -> Option<&[Driver]> {
        match self {
            Self::NotLoaded => None,
            Self::Loaded(drivers) => Some(drivers),
        }
    }

    pub fn ranked(&self) -> Option<Vec<&Driver>> {
        self.drivers().map(ranking::rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_loaded() {
        let roster = Roster::new();
        assert_eq!(roster.drivers(), None);
        assert_eq!(roster.ranked(), None);
        assert_eq!(Roster::default(), roster);
    }

    #[test]
    fn test_loaded_empty_is_not_missing() {
        let mut roster = Roster::new();
        roster.load(Vec::new());
        assert_ne!(roster, Roster::NotLoaded);
        assert_eq!(roster.drivers(), Some(&[][..]));
        assert_eq!(roster.ranked(), Some(Vec::new()));
    }

    #[test]
    fn test_reload_replaces_drivers() {
        let mut roster = Roster::new();
        roster.load(vec![Driver::new("Isack Hadjar", "Racing Bulls")]);
        roster.load(vec![Driver::new("Oliver Bearman", "Haas")]);
        let drivers = roster.drivers().unwrap();
        assert_eq!(drivers.len(), 1);
        assert_eq!(drivers[0].name, "Oliver Bearman");
    }

    #[test]
    fn test_ranked_orders_loaded_drivers() {
        let mut rookie = Driver::new("Kimi Antonelli", "Mercedes");
        rookie.rookie = true;
        let veteran = Driver::new("George Russell", "Mercedes");
        let mut roster = Roster::new();
        roster.load(vec![rookie, veteran]);
        let names = roster
            .ranked()
            .unwrap()
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["George Russell", "Kimi Antonelli"]);
    }
}
