// src/view/sort.rs
//
// Column sorting: which field, which direction, and how two records compare.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::record::Record;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Value for an `aria-sort` attribute.
    pub fn aria(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }

    pub fn short(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Sortable record fields, named as in the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    Library,
    Nation,
    City,
    Website,
    Iiif,
    FreeLicense,
    IsPartOf,
    ProjectName,
    ProjectUrl,
}

impl SortKey {
    pub const ALL: [SortKey; 9] = [
        SortKey::Library,
        SortKey::Nation,
        SortKey::City,
        SortKey::Website,
        SortKey::Iiif,
        SortKey::FreeLicense,
        SortKey::IsPartOf,
        SortKey::ProjectName,
        SortKey::ProjectUrl,
    ];

    /// JSON field name; also used for `data-sort` attributes.
    pub fn field(self) -> &'static str {
        match self {
            SortKey::Library => "library",
            SortKey::Nation => "nation",
            SortKey::City => "city",
            SortKey::Website => "website",
            SortKey::Iiif => "iiif",
            SortKey::FreeLicense => "is_free_cultural_works_license",
            SortKey::IsPartOf => "is_part_of",
            SortKey::ProjectName => "is_part_of_project_name",
            SortKey::ProjectUrl => "is_part_of_url",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if let Some(k) = SortKey::ALL.iter().find(|k| k.field() == t) {
            return Ok(*k);
        }
        match t {
            "isFreeCulturalWorksLicense" | "free" => Ok(SortKey::FreeLicense),
            "isPartOf" => Ok(SortKey::IsPartOf),
            "isPartOfProjectName" | "project" => Ok(SortKey::ProjectName),
            "isPartOfUrl" => Ok(SortKey::ProjectUrl),
            other => Err(format!("Unknown sort field: {other}")),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// Active sort column and direction. Only one column is ever active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortState {
    /// Same key flips direction; a new key starts ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Ascending;
        }
    }

    /// Direction shown for `key`, if it is the active column.
    pub fn direction_for(&self, key: SortKey) -> Option<SortDirection> {
        (self.key == Some(key)).then_some(self.direction)
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    Flag(bool),
    Text(String),
}

fn text(v: Option<&str>) -> SortValue {
    SortValue::Text(v.unwrap_or("").to_lowercase())
}

fn sort_value(r: &Record, key: SortKey) -> SortValue {
    match key {
        SortKey::Library => text(Some(&r.library)),
        SortKey::Nation => text(Some(&r.nation)),
        SortKey::City => text(r.city.as_deref()),
        SortKey::Website => text(r.website.as_deref()),
        SortKey::Iiif => SortValue::Flag(r.iiif.is_true()),
        SortKey::FreeLicense => SortValue::Flag(r.free_license.is_true()),
        SortKey::IsPartOf => SortValue::Flag(r.is_part_of.is_true()),
        SortKey::ProjectName => text(r.is_part_of_project_name.as_deref()),
        SortKey::ProjectUrl => text(r.is_part_of_url.as_deref()),
    }
}

/// Case-insensitive three-way comparison on one field.
pub fn compare(a: &Record, b: &Record, key: SortKey, dir: SortDirection) -> Ordering {
    let ord = sort_value(a, key).cmp(&sort_value(b, key));
    match dir {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

/// Stable in-place sort. Equal records keep their previous relative order.
pub fn sort_records(records: &mut [Record], state: SortState) {
    if let Some(key) = state.key {
        records.sort_by(|a, b| compare(a, b, key, state.direction));
    }
}

/// Display-name ordering used for the initial load order.
///
/// Approximates a default locale collation: letters compare case- and
/// accent-insensitively first, then lowercase sorts before uppercase,
/// then raw code points break any remaining tie.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = a.chars().flat_map(fold).cmp(b.chars().flat_map(fold));
    primary
        .then_with(|| {
            let ca = a.chars().filter(|c| c.is_alphabetic()).map(char::is_uppercase);
            let cb = b.chars().filter(|c| c.is_alphabetic()).map(char::is_uppercase);
            ca.cmp(cb)
        })
        .then_with(|| a.cmp(b))
}

// Primary-strength key for one char: lowercase, Latin diacritics stripped.
fn fold(c: char) -> impl Iterator<Item = char> {
    let lower = c.to_lowercase();
    lower.flat_map(|l| {
        let (base, extra) = strip_diacritic(l);
        std::iter::once(base).chain(extra)
    })
}

fn strip_diacritic(c: char) -> (char, Option<char>) {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' | 'ș' => 's',
        'ţ' | 'ť' | 'ŧ' | 'ț' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        'ß' => return ('s', Some('s')),
        'æ' => return ('a', Some('e')),
        'œ' => return ('o', Some('e')),
        other => other,
    };
    (base, None)
}
