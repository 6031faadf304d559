//! Random company and hiring-manager names.

use crate::content::ContentTables;
use rand::Rng;
use rand::seq::SliceRandom;

/// The four shapes a company name can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyTemplate {
    /// `{adjective} {noun} {suffix}`
    AdjectiveNounSuffix,
    /// `{adjective} {noun} & Associates`
    Associates,
    /// `{noun} of {adjective} {suffix}`
    NounOfAdjective,
    /// `{adjective}-{noun} {suffix}`
    Hyphenated,
}

impl CompanyTemplate {
    pub const ALL: [CompanyTemplate; 4] = [
        CompanyTemplate::AdjectiveNounSuffix,
        CompanyTemplate::Associates,
        CompanyTemplate::NounOfAdjective,
        CompanyTemplate::Hyphenated,
    ];

    pub fn render(self, adjective: &str, noun: &str, suffix: &str) -> String {
        match self {
            Self::AdjectiveNounSuffix => format!("{} {} {}", adjective, noun, suffix),
            Self::Associates => format!("{} {} & Associates", adjective, noun),
            Self::NounOfAdjective => format!("{} of {} {}", noun, adjective, suffix),
            Self::Hyphenated => format!("{}-{} {}", adjective, noun, suffix),
        }
    }
}

pub fn generate_company<R: Rng + ?Sized>(rng: &mut R, tables: &ContentTables) -> String {
    let template = CompanyTemplate::ALL
        .choose(rng)
        .copied()
        .unwrap_or(CompanyTemplate::AdjectiveNounSuffix);
    let adjective = pick(rng, tables.adjectives());
    let noun = pick(rng, tables.nouns());
    let suffix = pick(rng, tables.suffixes());
    template.render(adjective, noun, suffix)
}

pub fn generate_manager<R: Rng + ?Sized>(rng: &mut R, tables: &ContentTables) -> String {
    let first = pick(rng, tables.manager_first());
    let last = pick(rng, tables.manager_last());
    format!("{} {}", first, last)
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &'a [String]) -> &'a str {
    items.choose(rng).map(String::as_str).unwrap_or_default()
}
