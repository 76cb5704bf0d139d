//! Mapping from the Floresta Sintá(c)tica tagset (Linguateca) to the
//! universal tagset.
//!
//! The source tag inventory was collected directly from the corpus, storing
//! only unique occurrences. References:
//! <https://www.linguateca.pt/Floresta/> and
//! <http://visl.sdu.dk/visl/pt/symbolset-floresta.html>.

use crate::types::UniversalTag;

use super::TagMapping;

/// Floresta tags carry syntactic information before the POS component, e.g.
/// `H+prp-` for a phrase-head preposition. Keeps only the POS component after
/// the last `+`; tags without a `+` pass through unchanged.
pub fn pos_tag(tag: &str) -> &str {
    tag.rsplit('+').next().unwrap_or(tag)
}

/// Builds the Floresta → universal table. Table entries are preserved
/// verbatim from the corpus inventory, including junk tags documented there.
pub fn mapping() -> TagMapping {
    let mut mapping = TagMapping::new(UniversalTag::X);

    mapping.insert_all(
        &[
            "!", "\"", "'", "*", ",", "-", ".", "/", ";", "?", "[", "]", "{", "}", "»", "«",
        ],
        UniversalTag::Punct,
    );

    mapping.insert_all(&["adj"], UniversalTag::Adj);

    mapping.insert_all(&["num"], UniversalTag::Num);

    mapping.insert_all(&["adv"], UniversalTag::Adv);

    mapping.insert_all(&["conj-c", "conj-s"], UniversalTag::Conj);

    mapping.insert_all(&["art"], UniversalTag::Det);

    // prop: proper noun.
    mapping.insert_all(&["n", "prop"], UniversalTag::Noun);

    mapping.insert_all(&["pron-det", "pron-indp", "pron-pers"], UniversalTag::Pron);

    // No particle tag in Floresta; the empty tag lands here.
    mapping.insert_all(&[""], UniversalTag::Prt);

    // Three occurrences of "em" carry H+prp-; pp is a prepositional phrase.
    mapping.insert_all(&["prp", "prp-", "pp"], UniversalTag::Adp);

    mapping.insert_all(
        &["v-fin", "v-ger", "v-inf", "v-pcp", "vp"],
        UniversalTag::Verb,
    );

    // N<{'185/60_R_14'} tags the literal word 185/60_R_14.
    // ec: bound prefixes such as anti-, ex-, pós.
    mapping.insert_all(&["ec", "in", "N<{'185/60_R_14'}"], UniversalTag::X);

    mapping
}
