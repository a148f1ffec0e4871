//! Hint table aggregation
//!
//! Counts words by (two-letter prefix, length). Rows are prefixes in
//! alphabetical order, columns are lengths in ascending order, and a final
//! `Σ` row and column carry the totals.

use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

const SIGMA: &str = "Σ";

/// Length × two-letter-prefix count matrix over a word list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintTable {
    counts: FxHashMap<(String, usize), usize>,
    prefixes: Vec<String>,
    lengths: Vec<usize>,
    pangram_count: usize,
}

impl HintTable {
    /// Aggregate `words`, counting those listed in `pangrams` as remaining pangrams
    pub fn from_words<'a, I>(words: I, pangrams: &BTreeSet<String>) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: FxHashMap<(String, usize), usize> = FxHashMap::default();
        let mut prefixes = BTreeSet::new();
        let mut lengths = BTreeSet::new();
        let mut pangram_count = 0;

        for word in words {
            let word = word.to_lowercase();
            let prefix: String = word.chars().take(2).collect();
            let length = word.chars().count();

            *counts.entry((prefix.clone(), length)).or_insert(0) += 1;
            prefixes.insert(prefix);
            lengths.insert(length);
            if pangrams.contains(&word) {
                pangram_count += 1;
            }
        }

        Self {
            counts,
            prefixes: prefixes.into_iter().collect(),
            lengths: lengths.into_iter().collect(),
            pangram_count,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Row keys, alphabetical
    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Column keys, ascending
    #[must_use]
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    #[must_use]
    pub fn cell(&self, prefix: &str, length: usize) -> usize {
        self.counts
            .get(&(prefix.to_lowercase(), length))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn row_total(&self, prefix: &str) -> usize {
        self.lengths.iter().map(|&len| self.cell(prefix, len)).sum()
    }

    #[must_use]
    pub fn column_total(&self, length: usize) -> usize {
        self.prefixes.iter().map(|p| self.cell(p, length)).sum()
    }

    /// Grand total, equal to the number of words aggregated
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub const fn pangram_count(&self) -> usize {
        self.pangram_count
    }

    /// Fixed-width text table with `-` for empty cells
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::HintTable;
    /// use std::collections::BTreeSet;
    ///
    /// let table = HintTable::from_words(["hunk", "chunk"], &BTreeSet::new());
    /// assert_eq!(table.format_table(), "   4  5  Σ\nCH -  1  1\nHU 1  -  1\nΣ  1  1  2");
    /// ```
    #[must_use]
    pub fn format_table(&self) -> String {
        if self.is_empty() {
            return "There are no remaining words.".to_string();
        }

        let mut out = String::from("   ");
        let header: Vec<String> = self.lengths.iter().map(|len| format!("{len:<2}")).collect();
        out.push_str(&format!("{} {SIGMA}\n", header.join(" ")));

        for prefix in &self.prefixes {
            let cells: Vec<String> = self
                .lengths
                .iter()
                .map(|&len| match self.cell(prefix, len) {
                    0 => "- ".to_string(),
                    count => format!("{count:<2}"),
                })
                .collect();
            out.push_str(&format!(
                "{:<3}{} {}\n",
                prefix.to_uppercase(),
                cells.join(" "),
                self.row_total(prefix)
            ));
        }

        let sums: Vec<String> = self
            .lengths
            .iter()
            .map(|&len| format!("{:<2}", self.column_total(len)))
            .collect();
        out.push_str(&format!("{SIGMA}  {} {}", sums.join(" "), self.total()));
        out
    }

    /// `"Ch: 3, Hu: 2"`, prefixes in alphabetical order
    #[must_use]
    pub fn format_two_letters(&self) -> String {
        self.prefixes
            .iter()
            .map(|prefix| format!("{}: {}", capitalize(prefix), self.row_total(prefix)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Sentence stating how many pangrams remain
    #[must_use]
    pub fn format_pangram_count(&self) -> String {
        match self.pangram_count {
            0 => "There are no remaining pangrams.".to_string(),
            1 => "There is one remaining pangram.".to_string(),
            n => format!("There are {} remaining pangrams.", cardinal_words(n)),
        }
    }

    /// Table, prefix summary and pangram sentence together
    #[must_use]
    pub fn format_summary(&self) -> String {
        let mut out = self.format_table();
        if !self.is_empty() {
            out.push_str("\n\n");
            out.push_str(&self.format_two_letters());
        }
        out.push('\n');
        out.push_str(&self.format_pangram_count());
        out
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Spell out `n` in English words below one hundred, digits from there on
///
/// # Examples
/// ```
/// use spelling_bee::core::cardinal_words;
///
/// assert_eq!(cardinal_words(0), "zero");
/// assert_eq!(cardinal_words(42), "forty-two");
/// assert_eq!(cardinal_words(100), "100");
/// ```
#[must_use]
pub fn cardinal_words(n: usize) -> String {
    const ONES: [&str; 20] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
        "eighteen", "nineteen",
    ];
    const TENS: [&str; 10] = [
        "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    ];

    match n {
        0..20 => ONES[n].to_string(),
        20..100 if n % 10 == 0 => TENS[n / 10].to_string(),
        20..100 => format!("{}-{}", TENS[n / 10], ONES[n % 10]),
        _ => n.to_string(),
    }
}
