use nutype::nutype;

/// One selectable entry of the service dropdown.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 256),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Deref,
        TryFrom,
        AsRef,
        Display,
        Serialize,
        Deserialize
    )
)]
pub struct ServiceOption(String);

/// The ordered, non-empty list of service options. The first entry is the
/// default selection of every new draft.
#[nutype(
    validate(predicate = |options: &Vec<ServiceOption>| !options.is_empty()),
    derive(Debug, Clone, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
)]
pub struct ServiceOptions(Vec<ServiceOption>);

impl ServiceOptions {
    pub fn default_option(&self) -> &ServiceOption {
        // non-empty by construction
        &self[0]
    }

    /// Resolve a user's choice, given either as the exact option text or as
    /// its 1-based position in the list.
    pub fn find(&self, choice: &str) -> Option<&ServiceOption> {
        let choice = choice.trim();
        self.iter()
            .find(|option| option.as_str() == choice)
            .or_else(|| {
                choice
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|idx| self.get(idx))
            })
    }

    pub fn contains(&self, service: &str) -> bool {
        self.iter().any(|option| option.as_str() == service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ServiceOptions {
        ["Pendirian PT", "Pendirian CV", "Pendirian Yayasan"]
            .into_iter()
            .map(|x| ServiceOption::try_new(x).unwrap())
            .collect::<Vec<_>>()
            .try_into()
            .unwrap()
    }

    #[test]
    fn default_is_first() {
        assert_eq!(options().default_option().as_str(), "Pendirian PT");
    }

    #[test]
    fn empty_list_rejected() {
        assert!(ServiceOptions::try_new(Vec::new()).is_err());
    }

    #[test]
    fn blank_option_rejected() {
        assert!(ServiceOption::try_new("   ").is_err());
    }

    #[test]
    fn find() {
        let options = options();
        for (choice, expected) in [
            ("Pendirian CV", Some("Pendirian CV")),
            (" Pendirian Yayasan ", Some("Pendirian Yayasan")),
            ("1", Some("Pendirian PT")),
            ("3", Some("Pendirian Yayasan")),
            ("0", None),
            ("4", None),
            ("pendirian cv", None),
            ("", None),
        ] {
            let output = options.find(choice).map(|x| x.as_str());
            assert_eq!(output, expected, "choice {choice:?}");
        }
    }

    #[test]
    fn contains() {
        let options = options();
        assert!(options.contains("Pendirian PT"));
        assert!(!options.contains("Pendirian PT "));
        assert!(!options.contains("Perubahan Akta"));
    }
}
