//! Mapping from the Mac-Morpho tagset (NILC) to the universal tagset.
//!
//! The source tag inventory was collected directly from the corpus, storing
//! only unique occurrences. Reference:
//! <http://nilc.icmc.usp.br/macmorpho/macmorpho-manual.pdf>.

use crate::types::UniversalTag;

use super::TagMapping;

/// Builds the Mac-Morpho → universal table. Entries are preserved verbatim
/// from the corpus inventory; annotation typos found in the data (`NPRO`,
/// `PREP|`) are mapped explicitly to their intended tag instead of falling
/// through to the default.
pub fn mapping() -> TagMapping {
    let mut mapping = TagMapping::new(UniversalTag::X);

    // $ counts as punctuation here.
    mapping.insert_all(
        &[
            "!", "\"", "$", "'", "(", ")", ",", "-", ".", "/", ":", ";", "?", "[", "]",
        ],
        UniversalTag::Punct,
    );

    mapping.insert_all(&["ADJ", "ADJ|EST"], UniversalTag::Adj);

    mapping.insert_all(&["NUM", "NUM|TEL"], UniversalTag::Num);

    mapping.insert_all(
        &[
            "ADV", "ADV-KS", "ADV-KS-REL", "ADV|+", "ADV|EST", "ADV|[", "ADV|]",
        ],
        UniversalTag::Adv,
    );

    mapping.insert_all(&["KC", "KC|[", "KC|]", "KS"], UniversalTag::Conj);

    mapping.insert_all(&["ART", "ART|+"], UniversalTag::Det);

    // NPRO is a typo of NPROP: two occurrences for "Folha", one for
    // "Congresso".
    mapping.insert_all(
        &[
            "N", "NPRO", "NPROP", "NPROP|+", "N|AP", "N|DAT", "N|EST", "N|HOR", "N|TEL",
        ],
        UniversalTag::Noun,
    );

    mapping.insert_all(
        &["PRO-KS", "PRO-KS-REL", "PROADJ", "PROPESS", "PROSUB"],
        UniversalTag::Pron,
    );

    mapping.insert_all(&["PDEN"], UniversalTag::Prt);

    // PREP| is a typo of PREP: two occurrences for "de".
    mapping.insert_all(
        &["PREP", "PREP|", "PREP|+", "PREP|[", "PREP|]"],
        UniversalTag::Adp,
    );

    // PCP tags participles.
    mapping.insert_all(&["V", "V|+", "VAUX", "VAUX|+", "PCP"], UniversalTag::Verb);

    mapping.insert_all(&["CUR", "IN"], UniversalTag::X);

    mapping
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_documented_tags() {
        let mapping = mapping();

        assert_eq!(mapping.map_tag("NPROP|+"), UniversalTag::Noun);
        assert_eq!(mapping.map_tag("PCP"), UniversalTag::Verb);
        assert_eq!(mapping.map_tag("ADV|["), UniversalTag::Adv);
        assert_eq!(mapping.map_tag("$"), UniversalTag::Punct);
        assert_eq!(mapping.map_tag("CUR"), UniversalTag::X);
    }

    #[test]
    fn maps_documented_typos_to_their_intended_tag() {
        let mapping = mapping();

        assert_eq!(mapping.map_tag("NPRO"), UniversalTag::Noun);
        assert_eq!(mapping.map_tag("PREP|"), UniversalTag::Adp);
    }
}
