use std::fmt;

/// The in-memory form of an address composite field. The parts live in the
/// record's sub-column fields; this struct is assembled and scattered by the
/// record on access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub region: String,
    pub postal: String,
    pub country: String,
}

impl Address {
    /// Semantic sub-part names paired with the value of that part. Order
    /// matches the composite map the server declares for address columns.
    pub fn parts(&self) -> [(&'static str, &str); 6] {
        [
            ("street", &self.line1),
            ("street2", &self.line2),
            ("city", &self.city),
            ("region", &self.region),
            ("postal", &self.postal),
            ("country", &self.country),
        ]
    }

    /// The sub-part names every address composite map must resolve.
    pub fn part_names() -> [&'static str; 6] {
        ["street", "street2", "city", "region", "postal", "country"]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (_, part) in self.parts() {
            if part.is_empty() {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(part)?;
            first = false;
        }
        Ok(())
    }
}
