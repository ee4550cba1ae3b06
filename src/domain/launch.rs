// Launch catalog domain model

/// One discrete static-fire event.
#[derive(Debug, Clone)]
pub struct Launch {
    pub id: String,
    pub name: String,
}

impl Launch {
    pub fn new(id: String, name: String) -> Self {
        Self { id, name }
    }
}

/// Fixed mapping from launch identifiers to human-readable display names.
/// Reference data, not derived from the log; the default covers the nine
/// known launches and can be replaced through configuration.
#[derive(Debug, Clone)]
pub struct LaunchCatalog {
    launches: Vec<Launch>,
}

impl LaunchCatalog {
    pub fn new(launches: Vec<Launch>) -> Self {
        Self { launches }
    }

    pub fn launches(&self) -> &[Launch] {
        &self.launches
    }

    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.launches
            .iter()
            .find(|l| l.id == id)
            .map(|l| l.name.as_str())
    }
}

impl Default for LaunchCatalog {
    fn default() -> Self {
        let entries = [
            ("S001", "First Wild Ride"),
            ("S002", "Orbit Firestorm"),
            ("S003", "Orbit Breakthrough"),
            ("S004", "Booster Catch Win"),
            ("S005", "Raptor Burn Success"),
            ("S006", "Stable Orbit Run"),
            ("S007", "Avionics Glitch"),
            ("S008", "Engine Fail Frenzy"),
            ("S009", "Block 2 Glory"),
        ];
        Self::new(
            entries
                .into_iter()
                .map(|(id, name)| Launch::new(id.to_string(), name.to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_nine_launches() {
        let catalog = LaunchCatalog::default();
        assert_eq!(catalog.launches().len(), 9);
        assert_eq!(catalog.launches()[0].id, "S001");
        assert_eq!(catalog.display_name("S009"), Some("Block 2 Glory"));
        assert_eq!(catalog.launches().last().unwrap().id, "S009");
    }

    #[test]
    fn test_unknown_id_has_no_display_name() {
        let catalog = LaunchCatalog::default();
        assert_eq!(catalog.display_name("X123"), None);
    }
}
