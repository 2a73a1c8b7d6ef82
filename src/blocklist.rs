//! Static index of known-malicious extension IDs.
//!
//! The ShadyPanda campaign distributed a fixed set of Chromium extensions;
//! each installs under a directory named by its 32-character extension ID.
//! Detection is exact, case-sensitive ID membership — nothing inside the
//! extension is inspected.

use std::collections::HashSet;

/// Extension IDs attributed to the ShadyPanda campaign.
pub const MALICIOUS_EXTENSION_IDS: &[&str] = &[
    "bpgaffohfacaamplbbojgbiicfgedmoi",
    "cdgonefipacceedbkflolomdegncceid",
    "cihbmmokhmieaidfgamioabhhkggnehm",
    "eagiakjmjnblliacokhcalebgnhellfi", // Clean Master
    "eaokmbopbenbmgegkmoiogmpejlaikea",
    "gipnpcencdgljnaecpekokmpgnhgpela",
    "gnhgdhlkojnlgljamagoigaabdmfhfeg",
    "hlcjkaoneihodfmonjnlnnfpdcopgfjk",
    "hmhifpbclhgklaaepgbabgcpfgidkoei",
    "ibiejjpajlfljcgjndbonclhcbdcamai",
    "ijcpbhmpbaafndchbjdjchogaogelnjl",
    "imdgpklnabbkghcbhmkbjbhcomnfdige",
    "ineempkjpmbdejmdgienaphomigjjiej",
    "jbnopeoocgbmnochaadfnhiiimfpbpmf",
    "lehjnmndiohfaphecnjhopgookigekdk",
    "lhiehjmkpbhhkfapacaiheolgejcifgd",
    "llkncpcdceadgibhbedecmkencokjajg",
    "lnlononncfdnhdfmgpkdfoibmfdehfoj",
    "mljmfnkjmcdmongjnnnbbnajjdbojoci",
    "nagbiboibhbjbclhcigklajjdefaiidc",
    "nmfbniajnpceakchicdhfofoejhgjefb",
    "nnnklgkfdfbdijeeglhjfleaoagiagig",
    "ocffbdeldlbilgegmifiakciiicnoaeo",
    "ofkopmlicnffaiiabnmnaajaimmenkjn",
    "ogjneoecnllmjcegcfpaamfpbiaaiekh",
    "olaahjgjlhoehkpemnfognpgmkbedodk",
    "ondhgmkgppbdnogfiglikgpdkmkaiggk",
];

/// Returns the product name an ID was distributed under, where known.
pub fn known_name(id: &str) -> Option<&'static str> {
    match id {
        "eagiakjmjnblliacokhcalebgnhellfi" => Some("Clean Master"),
        _ => None,
    }
}

/// Immutable membership index over a set of extension IDs.
///
/// Built once at process start and shared read-only by every scan step.
/// Lookups are O(1) amortized regardless of list size.
#[derive(Debug, Clone)]
pub struct Blocklist {
    ids: HashSet<&'static str>,
}

impl Blocklist {
    /// Builds an index from a list of IDs. Duplicates collapse silently.
    pub fn new(ids: &[&'static str]) -> Self {
        Self {
            ids: ids.iter().copied().collect(),
        }
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of distinct IDs in the index.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for Blocklist {
    fn default() -> Self {
        Self::new(MALICIOUS_EXTENSION_IDS)
    }
}
