// rfdata - Robot Framework test data model, parser and writer
//
// Copyright (c) 2025 The rfdata contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Localized section headers, setting names, BDD prefixes and truth strings.
//!
//! Languages are passed explicitly to the reader and the writer through
//! [`Languages`]; there is no process-wide language state. English is always
//! consulted as the fallback after the file's own languages.

use std::fmt;

/// The kind of a data table, identified by its section header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Settings,
    Variables,
    TestCases,
    Tasks,
    Keywords,
    Comments,
}

impl SectionKind {
    pub fn english(&self) -> &'static str {
        match self {
            Self::Settings => "Settings",
            Self::Variables => "Variables",
            Self::TestCases => "Test Cases",
            Self::Tasks => "Tasks",
            Self::Keywords => "Keywords",
            Self::Comments => "Comments",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english())
    }
}

/// Every setting name the reader recognizes.
///
/// Test and task spellings are distinct keys so that the writer can localize
/// a programmatically created setting with the right word; both map onto the
/// same slot in the setting table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Documentation,
    Metadata,
    Library,
    Resource,
    Variables,
    Name,
    SuiteSetup,
    SuiteTeardown,
    TestSetup,
    TaskSetup,
    TestTeardown,
    TaskTeardown,
    TestTemplate,
    TaskTemplate,
    TestTimeout,
    TaskTimeout,
    TestTags,
    TaskTags,
    ForceTags,
    DefaultTags,
    KeywordTags,
    // Test and keyword level settings written inside brackets.
    Tags,
    Setup,
    Teardown,
    Template,
    Timeout,
    Arguments,
    Return,
}

impl SettingKey {
    /// Canonical English name, without brackets.
    pub fn english(&self) -> &'static str {
        match self {
            Self::Documentation => "Documentation",
            Self::Metadata => "Metadata",
            Self::Library => "Library",
            Self::Resource => "Resource",
            Self::Variables => "Variables",
            Self::Name => "Name",
            Self::SuiteSetup => "Suite Setup",
            Self::SuiteTeardown => "Suite Teardown",
            Self::TestSetup => "Test Setup",
            Self::TaskSetup => "Task Setup",
            Self::TestTeardown => "Test Teardown",
            Self::TaskTeardown => "Task Teardown",
            Self::TestTemplate => "Test Template",
            Self::TaskTemplate => "Task Template",
            Self::TestTimeout => "Test Timeout",
            Self::TaskTimeout => "Task Timeout",
            Self::TestTags => "Test Tags",
            Self::TaskTags => "Task Tags",
            Self::ForceTags => "Force Tags",
            Self::DefaultTags => "Default Tags",
            Self::KeywordTags => "Keyword Tags",
            Self::Tags => "Tags",
            Self::Setup => "Setup",
            Self::Teardown => "Teardown",
            Self::Template => "Template",
            Self::Timeout => "Timeout",
            Self::Arguments => "Arguments",
            Self::Return => "Return",
        }
    }

    /// Whether the key may appear in a settings table.
    pub fn is_table_setting(&self) -> bool {
        !matches!(
            self,
            Self::Tags
                | Self::Setup
                | Self::Teardown
                | Self::Template
                | Self::Timeout
                | Self::Arguments
                | Self::Return
        )
    }

    /// Whether the key may appear as a bracketed test or keyword setting.
    pub fn is_item_setting(&self) -> bool {
        matches!(
            self,
            Self::Documentation
                | Self::Tags
                | Self::Setup
                | Self::Teardown
                | Self::Template
                | Self::Timeout
                | Self::Arguments
                | Self::Return
        )
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english())
    }
}

/// Result of looking up a setting name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingMatch {
    pub key: SettingKey,
    /// Replacement to suggest when the name is a deprecated spelling.
    pub deprecated: Option<&'static str>,
}

/// Localized vocabulary of one human language.
#[derive(Debug, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub sections: &'static [(SectionKind, &'static str)],
    pub settings: &'static [(SettingKey, &'static str)],
    pub given: &'static [&'static str],
    pub when: &'static [&'static str],
    pub then: &'static [&'static str],
    pub and: &'static [&'static str],
    pub but: &'static [&'static str],
    pub true_strings: &'static [&'static str],
    pub false_strings: &'static [&'static str],
}

impl Language {
    /// Look up a language by code (`fi`, `pt-BR` style codes fall back to
    /// their primary subtag) or by English name, case-insensitively.
    pub fn from_name(name: &str) -> Option<&'static Language> {
        let wanted = name.trim().to_lowercase().replace('_', "-");
        let primary = wanted.split('-').next().unwrap_or_default().to_string();
        ALL_LANGUAGES.iter().copied().find(|lang| {
            lang.code == wanted || lang.code == primary || lang.name.to_lowercase() == wanted
        })
    }

    pub fn section_name(&self, kind: SectionKind) -> Option<&'static str> {
        self.sections
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, name)| *name)
    }

    pub fn setting_name(&self, key: SettingKey) -> Option<&'static str> {
        self.settings
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, name)| *name)
    }

    pub fn bdd_prefixes(&self) -> impl Iterator<Item = &'static str> {
        self.given
            .iter()
            .chain(self.when)
            .chain(self.then)
            .chain(self.and)
            .chain(self.but)
            .copied()
    }
}

/// Normalize a header or setting name for comparison: lowercase, whitespace
/// removed, trailing colon dropped.
pub fn normalize_name(name: &str) -> String {
    let collapsed: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    collapsed.trim_end_matches(':').to_string()
}

/// Normalize a keyword or test name for matching: lowercase, whitespace
/// and underscores removed.
///
/// ```
/// use rfdata_core::language::normalize_keyword_name;
///
/// assert_eq!(normalize_keyword_name("Open_Browser  Now"), "openbrowsernow");
/// ```
pub fn normalize_keyword_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// The ordered set of languages active for one data file.
#[derive(Debug, Clone, Default)]
pub struct Languages {
    languages: Vec<&'static Language>,
}

impl PartialEq for Languages {
    fn eq(&self, other: &Self) -> bool {
        self.codes() == other.codes()
    }
}

impl Eq for Languages {}

impl Languages {
    /// English only.
    pub fn english() -> Self {
        Self::default()
    }

    /// Build from language codes. Unknown codes are returned separately.
    pub fn from_codes<I, S>(codes: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut languages = Self::default();
        let mut unknown = Vec::new();
        for code in codes {
            match Language::from_name(code.as_ref()) {
                Some(lang) => languages.add(lang),
                None => unknown.push(code.as_ref().to_string()),
            }
        }
        (languages, unknown)
    }

    pub fn add(&mut self, language: &'static Language) {
        if !self.languages.iter().any(|l| l.code == language.code) {
            self.languages.push(language);
        }
    }

    /// Add the languages of `other` that are not yet present.
    pub fn merge(&mut self, other: &Languages) {
        for language in other.languages.iter().copied() {
            self.add(language);
        }
    }

    pub fn codes(&self) -> Vec<&'static str> {
        self.languages.iter().map(|l| l.code).collect()
    }

    pub fn is_english_only(&self) -> bool {
        self.languages.iter().all(|l| l.code == "en")
    }

    /// The language used when writing names back.
    pub fn primary(&self) -> &'static Language {
        self.languages.first().copied().unwrap_or(&ENGLISH)
    }

    fn search_order(&self) -> impl Iterator<Item = &'static Language> + '_ {
        self.languages
            .iter()
            .copied()
            .chain(std::iter::once(&ENGLISH))
    }

    /// Parse a `Language: fi, de` preamble directive.
    pub fn parse_directive(line: &str) -> Option<Vec<String>> {
        let (label, value) = line.split_once(':')?;
        if !label.trim().eq_ignore_ascii_case("language") {
            return None;
        }
        let codes: Vec<String> = value
            .split(',')
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        if codes.is_empty() {
            None
        } else {
            Some(codes)
        }
    }

    /// Recognize a section header name (asterisks already stripped).
    pub fn section(&self, name: &str) -> Option<SectionKind> {
        let wanted = normalize_name(name);
        for lang in self.search_order() {
            if let Some((kind, _)) = lang
                .sections
                .iter()
                .find(|(_, n)| normalize_name(n) == wanted)
            {
                return Some(*kind);
            }
        }
        ENGLISH_SECTION_ALIASES
            .iter()
            .find(|(alias, _)| *alias == wanted)
            .map(|(_, kind)| *kind)
    }

    /// Recognize a setting used in a settings table.
    pub fn table_setting(&self, name: &str) -> Option<SettingMatch> {
        self.lookup(name, |key| key.is_table_setting(), ENGLISH_TABLE_ALIASES)
    }

    /// Recognize a bracketed test or keyword setting. Brackets are optional.
    pub fn item_setting(&self, name: &str) -> Option<SettingMatch> {
        let inner = name
            .trim()
            .strip_prefix('[')
            .and_then(|n| n.strip_suffix(']'))
            .unwrap_or(name);
        self.lookup(inner, |key| key.is_item_setting(), ENGLISH_ITEM_ALIASES)
    }

    fn lookup(
        &self,
        name: &str,
        allowed: impl Fn(&SettingKey) -> bool,
        aliases: &[(&str, SettingKey, &'static str)],
    ) -> Option<SettingMatch> {
        let wanted = normalize_name(name);
        for lang in self.search_order() {
            if let Some((key, _)) = lang
                .settings
                .iter()
                .find(|(key, n)| allowed(key) && normalize_name(n) == wanted)
            {
                let deprecated = match key {
                    SettingKey::ForceTags => Some("Use 'Test Tags' instead."),
                    SettingKey::DefaultTags => {
                        Some("Use 'Test Tags' with the '-tag' syntax instead.")
                    }
                    _ => None,
                };
                return Some(SettingMatch {
                    key: *key,
                    deprecated,
                });
            }
        }
        aliases
            .iter()
            .find(|(alias, _, _)| *alias == wanted)
            .map(|(_, key, suggestion)| SettingMatch {
                key: *key,
                deprecated: Some(*suggestion),
            })
    }

    /// Localized section header name for writing.
    pub fn localized_section(&self, kind: SectionKind) -> &'static str {
        self.primary()
            .section_name(kind)
            .unwrap_or_else(|| kind.english())
    }

    /// Localized setting name for writing, without brackets.
    pub fn localized_setting(&self, key: SettingKey) -> &'static str {
        self.primary()
            .setting_name(key)
            .unwrap_or_else(|| key.english())
    }

    /// All BDD prefixes of the active languages plus English.
    pub fn bdd_prefixes(&self) -> Vec<&'static str> {
        let mut prefixes: Vec<&'static str> =
            self.search_order().flat_map(|l| l.bdd_prefixes()).collect();
        // Longest first so that "Et que" wins over "Et".
        prefixes.sort_by_key(|p| std::cmp::Reverse(p.len()));
        prefixes.dedup();
        prefixes
    }

    /// Split a keyword call into its BDD prefix (if any) and the rest.
    pub fn split_bdd_prefix<'a>(&self, name: &'a str) -> (Option<&'a str>, &'a str) {
        for prefix in self.bdd_prefixes() {
            let len = prefix.len();
            if name.len() > len
                && name.is_char_boundary(len)
                && name[..len].eq_ignore_ascii_case(prefix)
                && name[len..].starts_with(' ')
            {
                return (Some(&name[..len]), name[len + 1..].trim_start());
            }
        }
        (None, name)
    }

    pub fn is_true(&self, value: &str) -> bool {
        let wanted = value.trim().to_lowercase();
        self.search_order()
            .flat_map(|l| l.true_strings.iter())
            .any(|s| s.to_lowercase() == wanted)
    }

    pub fn is_false(&self, value: &str) -> bool {
        let wanted = value.trim().to_lowercase();
        self.search_order()
            .flat_map(|l| l.false_strings.iter())
            .any(|s| s.to_lowercase() == wanted)
    }
}

const ENGLISH_SECTION_ALIASES: &[(&str, SectionKind)] = &[
    ("setting", SectionKind::Settings),
    ("metadata", SectionKind::Settings),
    ("variable", SectionKind::Variables),
    ("testcase", SectionKind::TestCases),
    ("task", SectionKind::Tasks),
    ("keyword", SectionKind::Keywords),
    ("userkeyword", SectionKind::Keywords),
    ("userkeywords", SectionKind::Keywords),
    ("comment", SectionKind::Comments),
];

const ENGLISH_TABLE_ALIASES: &[(&str, SettingKey, &str)] = &[
    ("document", SettingKey::Documentation, "Use 'Documentation' instead."),
    ("suiteprecondition", SettingKey::SuiteSetup, "Use 'Suite Setup' instead."),
    ("suitepostcondition", SettingKey::SuiteTeardown, "Use 'Suite Teardown' instead."),
    ("testprecondition", SettingKey::TestSetup, "Use 'Test Setup' instead."),
    ("testpostcondition", SettingKey::TestTeardown, "Use 'Test Teardown' instead."),
];

const ENGLISH_ITEM_ALIASES: &[(&str, SettingKey, &str)] = &[
    ("document", SettingKey::Documentation, "Use '[Documentation]' instead."),
    ("precondition", SettingKey::Setup, "Use '[Setup]' instead."),
    ("postcondition", SettingKey::Teardown, "Use '[Teardown]' instead."),
];

/// All supported languages.
pub static ALL_LANGUAGES: &[&Language] = &[
    &ENGLISH, &FINNISH, &GERMAN, &FRENCH, &SWEDISH, &DUTCH, &PORTUGUESE,
];

pub static ENGLISH: Language = Language {
    code: "en",
    name: "English",
    sections: &[
        (SectionKind::Settings, "Settings"),
        (SectionKind::Variables, "Variables"),
        (SectionKind::TestCases, "Test Cases"),
        (SectionKind::Tasks, "Tasks"),
        (SectionKind::Keywords, "Keywords"),
        (SectionKind::Comments, "Comments"),
    ],
    settings: &[
        (SettingKey::Documentation, "Documentation"),
        (SettingKey::Metadata, "Metadata"),
        (SettingKey::Library, "Library"),
        (SettingKey::Resource, "Resource"),
        (SettingKey::Variables, "Variables"),
        (SettingKey::Name, "Name"),
        (SettingKey::SuiteSetup, "Suite Setup"),
        (SettingKey::SuiteTeardown, "Suite Teardown"),
        (SettingKey::TestSetup, "Test Setup"),
        (SettingKey::TaskSetup, "Task Setup"),
        (SettingKey::TestTeardown, "Test Teardown"),
        (SettingKey::TaskTeardown, "Task Teardown"),
        (SettingKey::TestTemplate, "Test Template"),
        (SettingKey::TaskTemplate, "Task Template"),
        (SettingKey::TestTimeout, "Test Timeout"),
        (SettingKey::TaskTimeout, "Task Timeout"),
        (SettingKey::TestTags, "Test Tags"),
        (SettingKey::TaskTags, "Task Tags"),
        (SettingKey::ForceTags, "Force Tags"),
        (SettingKey::DefaultTags, "Default Tags"),
        (SettingKey::KeywordTags, "Keyword Tags"),
        (SettingKey::Tags, "Tags"),
        (SettingKey::Setup, "Setup"),
        (SettingKey::Teardown, "Teardown"),
        (SettingKey::Template, "Template"),
        (SettingKey::Timeout, "Timeout"),
        (SettingKey::Arguments, "Arguments"),
        (SettingKey::Return, "Return"),
    ],
    given: &["Given"],
    when: &["When"],
    then: &["Then"],
    and: &["And"],
    but: &["But"],
    true_strings: &["True", "Yes", "On"],
    false_strings: &["False", "No", "Off"],
};

pub static FINNISH: Language = Language {
    code: "fi",
    name: "Finnish",
    sections: &[
        (SectionKind::Settings, "Asetukset"),
        (SectionKind::Variables, "Muuttujat"),
        (SectionKind::TestCases, "Testit"),
        (SectionKind::Tasks, "Tehtävät"),
        (SectionKind::Keywords, "Avainsanat"),
        (SectionKind::Comments, "Kommentit"),
    ],
    settings: &[
        (SettingKey::Documentation, "Dokumentaatio"),
        (SettingKey::Metadata, "Metatiedot"),
        (SettingKey::Library, "Kirjasto"),
        (SettingKey::Resource, "Resurssi"),
        (SettingKey::Variables, "Muuttujat"),
        (SettingKey::Name, "Nimi"),
        (SettingKey::SuiteSetup, "Setin Alustus"),
        (SettingKey::SuiteTeardown, "Setin Alasajo"),
        (SettingKey::TestSetup, "Testin Alustus"),
        (SettingKey::TaskSetup, "Tehtävän Alustus"),
        (SettingKey::TestTeardown, "Testin Alasajo"),
        (SettingKey::TaskTeardown, "Tehtävän Alasajo"),
        (SettingKey::TestTemplate, "Testin Malli"),
        (SettingKey::TaskTemplate, "Tehtävän Malli"),
        (SettingKey::TestTimeout, "Testin Aikaraja"),
        (SettingKey::TaskTimeout, "Tehtävän Aikaraja"),
        (SettingKey::TestTags, "Testin Tagit"),
        (SettingKey::TaskTags, "Tehtävän Tagit"),
        (SettingKey::KeywordTags, "Avainsanan Tagit"),
        (SettingKey::Tags, "Tagit"),
        (SettingKey::Setup, "Alustus"),
        (SettingKey::Teardown, "Alasajo"),
        (SettingKey::Template, "Malli"),
        (SettingKey::Timeout, "Aikaraja"),
        (SettingKey::Arguments, "Argumentit"),
    ],
    given: &["Oletetaan"],
    when: &["Kun"],
    then: &["Niin"],
    and: &["Ja"],
    but: &["Mutta"],
    true_strings: &["Tosi", "Kyllä", "Päällä"],
    false_strings: &["Epätosi", "Ei", "Pois"],
};

pub static GERMAN: Language = Language {
    code: "de",
    name: "German",
    sections: &[
        (SectionKind::Settings, "Einstellungen"),
        (SectionKind::Variables, "Variablen"),
        (SectionKind::TestCases, "Testfälle"),
        (SectionKind::Tasks, "Aufgaben"),
        (SectionKind::Keywords, "Schlüsselwörter"),
        (SectionKind::Comments, "Kommentare"),
    ],
    settings: &[
        (SettingKey::Documentation, "Dokumentation"),
        (SettingKey::Metadata, "Metadaten"),
        (SettingKey::Library, "Bibliothek"),
        (SettingKey::Resource, "Ressource"),
        (SettingKey::Variables, "Variablen"),
        (SettingKey::Name, "Name"),
        (SettingKey::SuiteSetup, "Suitevorbereitung"),
        (SettingKey::SuiteTeardown, "Suitenachbereitung"),
        (SettingKey::TestSetup, "Testvorbereitung"),
        (SettingKey::TaskSetup, "Aufgabenvorbereitung"),
        (SettingKey::TestTeardown, "Testnachbereitung"),
        (SettingKey::TaskTeardown, "Aufgabennachbereitung"),
        (SettingKey::TestTemplate, "Testvorlage"),
        (SettingKey::TaskTemplate, "Aufgabenvorlage"),
        (SettingKey::TestTimeout, "Testzeitlimit"),
        (SettingKey::TaskTimeout, "Aufgabenzeitlimit"),
        (SettingKey::TestTags, "Testmarker"),
        (SettingKey::TaskTags, "Aufgabenmarker"),
        (SettingKey::KeywordTags, "Schlüsselwortmarker"),
        (SettingKey::Tags, "Marker"),
        (SettingKey::Setup, "Vorbereitung"),
        (SettingKey::Teardown, "Nachbereitung"),
        (SettingKey::Template, "Vorlage"),
        (SettingKey::Timeout, "Zeitlimit"),
        (SettingKey::Arguments, "Argumente"),
    ],
    given: &["Angenommen"],
    when: &["Wenn"],
    then: &["Dann"],
    and: &["Und"],
    but: &["Aber"],
    true_strings: &["Wahr", "Ja", "An", "Ein"],
    false_strings: &["Falsch", "Nein", "Aus", "Unwahr"],
};

pub static FRENCH: Language = Language {
    code: "fr",
    name: "French",
    sections: &[
        (SectionKind::Settings, "Paramètres"),
        (SectionKind::Variables, "Variables"),
        (SectionKind::TestCases, "Unités de test"),
        (SectionKind::Tasks, "Tâches"),
        (SectionKind::Keywords, "Mots-clés"),
        (SectionKind::Comments, "Commentaires"),
    ],
    settings: &[
        (SettingKey::Documentation, "Documentation"),
        (SettingKey::Metadata, "Méta-donnée"),
        (SettingKey::Library, "Bibliothèque"),
        (SettingKey::Resource, "Ressource"),
        (SettingKey::Variables, "Variable"),
        (SettingKey::Name, "Nom"),
        (SettingKey::SuiteSetup, "Mise en place de suite"),
        (SettingKey::SuiteTeardown, "Démontage de suite"),
        (SettingKey::TestSetup, "Mise en place de test"),
        (SettingKey::TaskSetup, "Mise en place de tâche"),
        (SettingKey::TestTeardown, "Démontage de test"),
        (SettingKey::TaskTeardown, "Démontage de tâche"),
        (SettingKey::TestTemplate, "Modèle de test"),
        (SettingKey::TaskTemplate, "Modèle de tâche"),
        (SettingKey::TestTimeout, "Délai de test"),
        (SettingKey::TaskTimeout, "Délai de tâche"),
        (SettingKey::TestTags, "Étiquette de test"),
        (SettingKey::TaskTags, "Étiquette de tâche"),
        (SettingKey::KeywordTags, "Etiquette de mot-clé"),
        (SettingKey::Tags, "Étiquette"),
        (SettingKey::Setup, "Mise en place"),
        (SettingKey::Teardown, "Démontage"),
        (SettingKey::Template, "Modèle"),
        (SettingKey::Timeout, "Délai d'attente"),
        (SettingKey::Arguments, "Arguments"),
    ],
    given: &["Étant donné", "Soit"],
    when: &["Lorsque", "Quand"],
    then: &["Alors", "Donc"],
    and: &["Et"],
    but: &["Mais"],
    true_strings: &["Vrai", "Oui", "Actif"],
    false_strings: &["Faux", "Non", "Désactivé", "Aucun"],
};

pub static SWEDISH: Language = Language {
    code: "sv",
    name: "Swedish",
    sections: &[
        (SectionKind::Settings, "Inställningar"),
        (SectionKind::Variables, "Variabler"),
        (SectionKind::TestCases, "Testfall"),
        (SectionKind::Tasks, "Taskar"),
        (SectionKind::Keywords, "Nyckelord"),
        (SectionKind::Comments, "Kommentarer"),
    ],
    settings: &[
        (SettingKey::Documentation, "Dokumentation"),
        (SettingKey::Metadata, "Metadata"),
        (SettingKey::Library, "Bibliotek"),
        (SettingKey::Resource, "Resurs"),
        (SettingKey::Variables, "Variabel"),
        (SettingKey::Name, "Namn"),
        (SettingKey::SuiteSetup, "Svit konfigurering"),
        (SettingKey::SuiteTeardown, "Svit nedrivning"),
        (SettingKey::TestSetup, "Test konfigurering"),
        (SettingKey::TaskSetup, "Task konfigurering"),
        (SettingKey::TestTeardown, "Test nedrivning"),
        (SettingKey::TaskTeardown, "Task nedrivning"),
        (SettingKey::TestTemplate, "Test mall"),
        (SettingKey::TaskTemplate, "Task mall"),
        (SettingKey::TestTimeout, "Test timeout"),
        (SettingKey::TaskTimeout, "Task timeout"),
        (SettingKey::TestTags, "Test taggar"),
        (SettingKey::TaskTags, "Arbetsuppgift taggar"),
        (SettingKey::KeywordTags, "Nyckelord taggar"),
        (SettingKey::Tags, "Taggar"),
        (SettingKey::Setup, "Konfigurering"),
        (SettingKey::Teardown, "Nedrivning"),
        (SettingKey::Template, "Mall"),
        (SettingKey::Timeout, "Timeout"),
        (SettingKey::Arguments, "Argument"),
    ],
    given: &["Givet"],
    when: &["När"],
    then: &["Då"],
    and: &["Och"],
    but: &["Men"],
    true_strings: &["Sant", "Ja", "På"],
    false_strings: &["Falskt", "Nej", "Av", "Ingen"],
};

pub static DUTCH: Language = Language {
    code: "nl",
    name: "Dutch",
    sections: &[
        (SectionKind::Settings, "Instellingen"),
        (SectionKind::Variables, "Variabelen"),
        (SectionKind::TestCases, "Testgevallen"),
        (SectionKind::Tasks, "Taken"),
        (SectionKind::Keywords, "Sleutelwoorden"),
        (SectionKind::Comments, "Opmerkingen"),
    ],
    settings: &[
        (SettingKey::Documentation, "Documentatie"),
        (SettingKey::Metadata, "Metadata"),
        (SettingKey::Library, "Bibliotheek"),
        (SettingKey::Resource, "Resource"),
        (SettingKey::Variables, "Variabele"),
        (SettingKey::Name, "Naam"),
        (SettingKey::SuiteSetup, "Suitevoorbereiding"),
        (SettingKey::SuiteTeardown, "Suite-afronding"),
        (SettingKey::TestSetup, "Testvoorbereiding"),
        (SettingKey::TaskSetup, "Taakvoorbereiding"),
        (SettingKey::TestTeardown, "Testafronding"),
        (SettingKey::TaskTeardown, "Taakafronding"),
        (SettingKey::TestTemplate, "Testsjabloon"),
        (SettingKey::TaskTemplate, "Taaksjabloon"),
        (SettingKey::TestTimeout, "Testtijdslimiet"),
        (SettingKey::TaskTimeout, "Taaktijdslimiet"),
        (SettingKey::TestTags, "Testlabels"),
        (SettingKey::TaskTags, "Taaklabels"),
        (SettingKey::KeywordTags, "Sleutelwoordlabels"),
        (SettingKey::Tags, "Labels"),
        (SettingKey::Setup, "Voorbereiding"),
        (SettingKey::Teardown, "Afronding"),
        (SettingKey::Template, "Sjabloon"),
        (SettingKey::Timeout, "Tijdslimiet"),
        (SettingKey::Arguments, "Parameters"),
    ],
    given: &["Stel", "Gegeven"],
    when: &["Als"],
    then: &["Dan"],
    and: &["En"],
    but: &["Maar"],
    true_strings: &["Waar", "Ja", "Aan"],
    false_strings: &["Onwaar", "Nee", "Uit", "Geen"],
};

pub static PORTUGUESE: Language = Language {
    code: "pt",
    name: "Portuguese",
    sections: &[
        (SectionKind::Settings, "Definições"),
        (SectionKind::Variables, "Variáveis"),
        (SectionKind::TestCases, "Casos de Teste"),
        (SectionKind::Tasks, "Tarefas"),
        (SectionKind::Keywords, "Palavras-Chave"),
        (SectionKind::Comments, "Comentários"),
    ],
    settings: &[
        (SettingKey::Documentation, "Documentação"),
        (SettingKey::Metadata, "Metadados"),
        (SettingKey::Library, "Biblioteca"),
        (SettingKey::Resource, "Recurso"),
        (SettingKey::Variables, "Variável"),
        (SettingKey::Name, "Nome"),
        (SettingKey::SuiteSetup, "Inicialização de Suíte"),
        (SettingKey::SuiteTeardown, "Finalização de Suíte"),
        (SettingKey::TestSetup, "Inicialização de Teste"),
        (SettingKey::TaskSetup, "Inicialização de Tarefa"),
        (SettingKey::TestTeardown, "Finalização de Teste"),
        (SettingKey::TaskTeardown, "Finalização de Tarefa"),
        (SettingKey::TestTemplate, "Modelo de Teste"),
        (SettingKey::TaskTemplate, "Modelo de Tarefa"),
        (SettingKey::TestTimeout, "Tempo Limite de Teste"),
        (SettingKey::TaskTimeout, "Tempo Limite de Tarefa"),
        (SettingKey::TestTags, "Etiquetas de Testes"),
        (SettingKey::TaskTags, "Etiquetas de Tarefas"),
        (SettingKey::KeywordTags, "Etiquetas de Palavras-Chave"),
        (SettingKey::Tags, "Etiquetas"),
        (SettingKey::Setup, "Inicialização"),
        (SettingKey::Teardown, "Finalização"),
        (SettingKey::Template, "Modelo"),
        (SettingKey::Timeout, "Tempo Limite"),
        (SettingKey::Arguments, "Argumentos"),
    ],
    given: &["Dado"],
    when: &["Quando"],
    then: &["Então"],
    and: &["E"],
    but: &["Mas"],
    true_strings: &["Verdadeiro", "Verdade", "Sim", "Ligado"],
    false_strings: &["Falso", "Não", "Desligado", "Desativado", "Nada"],
};
