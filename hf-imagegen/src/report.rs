use std::fmt;

/// Raw view of one endpoint response, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticReport {
    pub url: String,
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl DiagnosticReport {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// First value of header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Status Code: {}", self.status)?;
        writeln!(f, "Response Headers:")?;
        for (name, value) in &self.headers {
            writeln!(f, "  {}: {}", name, value)?;
        }
        write!(f, "Body: {}", self.body)
    }
}
