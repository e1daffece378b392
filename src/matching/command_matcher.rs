//! Suggestions for mistyped command words.
//!
//! Matching happens in two tiers:
//! - Prefix matches: every known command starting with the input
//! - Fuzzy matches: edit-distance similarity above a cutoff, best first

/// Matcher for unknown command words.
#[derive(Debug, Clone)]
pub struct CommandMatcher {
    commands: Vec<&'static str>,
    max_results: usize,

    /// Minimum similarity (0-100) for a fuzzy suggestion
    cutoff: u8,
}

/// What the matcher found for an unknown word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    /// Commands starting with the typed word
    Prefix(Vec<&'static str>),

    /// Commands similar to the typed word, best first
    Fuzzy(Vec<&'static str>),

    /// Nothing close enough
    None,
}

impl CommandMatcher {
    /// Create a matcher over a command table.
    pub fn new(commands: &[&'static str], max_results: usize, cutoff: u8) -> Self {
        Self {
            commands: commands.to_vec(),
            max_results,
            cutoff,
        }
    }

    /// Find suggestions for `input`.
    pub fn suggest(&self, input: &str) -> Suggestion {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return Suggestion::None;
        }

        let prefix: Vec<_> = self
            .commands
            .iter()
            .copied()
            .filter(|cmd| cmd.starts_with(&input))
            .collect();
        if !prefix.is_empty() {
            return Suggestion::Prefix(prefix);
        }

        let mut scored: Vec<(u8, &'static str)> = self
            .commands
            .iter()
            .map(|cmd| (Self::similarity(&input, cmd), *cmd))
            .filter(|(score, _)| *score >= self.cutoff)
            .collect();

        // Sort by similarity (highest first); ties keep table order
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(self.max_results);

        if scored.is_empty() {
            Suggestion::None
        } else {
            Suggestion::Fuzzy(scored.into_iter().map(|(_, cmd)| cmd).collect())
        }
    }

    /// Render a suggestion as the message shown to the user.
    pub fn message(&self, input: &str) -> String {
        match self.suggest(input) {
            Suggestion::Fuzzy(found) if found.len() == 1 => {
                format!("🤔 Did you mean '{}'? Please try again!", found[0])
            }
            Suggestion::Prefix(found) | Suggestion::Fuzzy(found) => format!(
                "🤔 Did you mean one of these commands: {}? Please try again!",
                found
                    .iter()
                    .map(|cmd| format!("'{}'", cmd))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Suggestion::None => {
                "😓 Sorry, that command doesn’t exist. Type 'help' to see available commands."
                    .to_string()
            }
        }
    }

    /// Similarity score (0-100) derived from the Levenshtein distance.
    pub fn similarity(a: &str, b: &str) -> u8 {
        let max_len = a.chars().count().max(b.chars().count());
        if max_len == 0 {
            return 100;
        }
        let distance = Self::levenshtein_distance(a, b);
        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 100.0).round() as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single rolling row instead of the full matrix
        let mut prev: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut curr = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            curr[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        prev[s2_chars.len()]
    }
}
