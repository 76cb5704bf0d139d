//! Mapping from the NILC tagset, as used by the LacioWeb corpus, to the
//! universal tagset.
//!
//! The source tag inventory was extracted directly from the data and its
//! inconsistencies analyzed. Reference:
//! <http://www.nilc.icmc.usp.br/nilc/download/tagsetcompleto.doc>.

use crate::types::UniversalTag;

use super::TagMapping;

/// Builds the NILC → universal table. Entries are preserved verbatim from the
/// corpus inventory; annotation typos found in the data (`AUX`, `INT`) are
/// mapped explicitly to their intended tag instead of falling through to the
/// default.
pub fn mapping() -> TagMapping {
    let mut mapping = TagMapping::new(UniversalTag::X);

    mapping.insert_all(
        &[
            "!", "\"", "'", "(", ")", ",", "-", ".", "...", ":", ";", "?", "[", "]",
        ],
        UniversalTag::Punct,
    );

    mapping.insert_all(&["ADJ"], UniversalTag::Adj);

    mapping.insert_all(&["NC", "ORD", "NO"], UniversalTag::Num);

    mapping.insert_all(&["ADV", "ADV+PPOA", "ADV+PPR", "LADV"], UniversalTag::Adv);

    mapping.insert_all(&["CONJCOORD", "CONJSUB", "LCONJ"], UniversalTag::Conj);

    mapping.insert_all(&["ART"], UniversalTag::Det);

    mapping.insert_all(&["N", "NP"], UniversalTag::Noun);

    mapping.insert_all(
        &[
            "PAPASS", "PD", "PIND", "PINT", "PPOA", "PPOA+PPOA", "PPOT", "PPR", "PPS", "PR",
            "PREAL", "PTRA", "LP",
        ],
        UniversalTag::Pron,
    );

    mapping.insert_all(&["PDEN", "LDEN"], UniversalTag::Prt);

    // Contractions with a preposition keep the adposition reading.
    mapping.insert_all(
        &[
            "PREP",
            "PREP+ADJ",
            "PREP+ADV",
            "PREP+ART",
            "PREP+N",
            "PREP+PD",
            "PREP+PPOA",
            "PREP+PPOT",
            "PREP+PPR",
            "PREP+PREP",
            "LPREP",
            "LPREP+ART",
        ],
        UniversalTag::Adp,
    );

    // AUX is a typo of VAUX (four occurrences: sendo, continuar, deve,
    // foram_V). INT is a typo of VINT (one occurrence: ocorrido).
    mapping.insert_all(
        &[
            "VAUX",
            "VAUX!PPOA",
            "VAUX+PPOA",
            "VBI",
            "VBI+PAPASS",
            "VBI+PPOA",
            "VBI+PPR",
            "VINT",
            "VINT+PAPASS",
            "VINT+PPOA",
            "VINT+PREAL",
            "VLIG",
            "VLIG+PPOA",
            "VTD",
            "VTD!PPOA",
            "VTD+PAPASS",
            "VTD+PPOA",
            "VTD+PPR",
            "VTD+PREAL",
            "VTI",
            "VTI+PPOA",
            "VTI+PREAL",
            "AUX",
            "INT",
        ],
        UniversalTag::Verb,
    );

    // IL is likely residual; two occurrences ("CL-" and "po4-").
    mapping.insert_all(&["I", "RES", "IL"], UniversalTag::X);

    mapping
}
