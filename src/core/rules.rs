use crate::core::{LineOutcome, RuleProvider};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_free_of, validate_non_empty_list, validate_non_empty_string, validate_not_shadowed,
    validate_single_line, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MARKER: &str = "component:";
pub const DEFAULT_REPLACEMENT: &str = "      component: ComingSoon,";
pub const DEFAULT_PROTECTED: &[&str] = &["HRMManagementSimple"];
pub const DEFAULT_TARGETS: &[&str] = &[
    "TeleconsultAppointment",
    "WaitingHallDisplay",
    "PrintScheduleSimple",
    "SelfRegistrationKiosk",
    "ExternalAppointmentCapture",
    "ReferralManagementSimple",
];

/// Which route component lines get swapped for the placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchRules {
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default = "default_replacement")]
    pub replacement: String,
    #[serde(default)]
    pub protected: Vec<String>,
    pub targets: Vec<String>,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_replacement() -> String {
    DEFAULT_REPLACEMENT.to_string()
}

impl Default for PatchRules {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            replacement: default_replacement(),
            protected: DEFAULT_PROTECTED.iter().map(|s| s.to_string()).collect(),
            targets: DEFAULT_TARGETS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RuleProvider for PatchRules {
    fn marker(&self) -> &str {
        &self.marker
    }

    fn replacement(&self) -> &str {
        &self.replacement
    }

    fn protected_names(&self) -> &[String] {
        &self.protected
    }

    fn target_names(&self) -> &[String] {
        &self.targets
    }
}

impl Validate for PatchRules {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("rules.marker", &self.marker)?;
        validate_non_empty_string("rules.replacement", &self.replacement)?;
        validate_single_line("rules.marker", &self.marker)?;
        validate_single_line("rules.replacement", &self.replacement)?;
        validate_non_empty_list("rules.targets", &self.targets)?;
        for name in &self.protected {
            validate_non_empty_string("rules.protected", name)?;
        }
        validate_not_shadowed("rules.targets", &self.protected, &self.targets)?;

        // A replacement naming a target would be replaced again on the next run.
        validate_free_of("rules.replacement", &self.replacement, &self.targets)?;
        validate_free_of("rules.replacement", &self.replacement, &self.protected)?;
        Ok(())
    }
}

pub fn classify<R: RuleProvider + ?Sized>(rules: &R, line: &str) -> LineOutcome {
    if !line.contains(rules.marker()) {
        return LineOutcome::Untouched;
    }

    if rules
        .protected_names()
        .iter()
        .any(|name| line.contains(name.as_str()))
    {
        return LineOutcome::Protected;
    }

    match rules
        .target_names()
        .iter()
        .find(|name| line.contains(name.as_str()))
    {
        Some(target) => LineOutcome::Replaced {
            target: target.clone(),
        },
        None => LineOutcome::Unmatched,
    }
}

/// Returns the line to emit for `line` together with how it was classified.
pub fn patch_line<R: RuleProvider + ?Sized>(rules: &R, line: &str) -> (String, LineOutcome) {
    let outcome = classify(rules, line);
    let patched = match outcome {
        LineOutcome::Replaced { .. } => {
            if line.ends_with('\r') {
                format!("{}\r", rules.replacement())
            } else {
                rules.replacement().to_string()
            }
        }
        _ => line.to_string(),
    };
    (patched, outcome)
}
