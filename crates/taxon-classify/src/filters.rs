//! Subject-area category filters.

use taxon_core::{PaperMetadata, SubjectFilter};

#[rustfmt::skip]
pub const PHYSICS_CATEGORIES: &[&str] = &[
    "astro-ph.CO", "astro-ph.EP", "astro-ph.GA", "astro-ph.HE", "astro-ph.IM", "astro-ph.SR",
    "cond-mat.dis-nn", "cond-mat.mes-hall", "cond-mat.mtrl-sci", "cond-mat.other", "cond-mat.quant-gas",
    "cond-mat.soft", "cond-mat.stat-mech", "cond-mat.str-el", "cond-mat.supr-con",
    "gr-qc", "hep-ex", "hep-lat", "hep-ph", "hep-th", "math-ph",
    "nlin.AO", "nlin.CD", "nlin.CG", "nlin.PS", "nlin.SI",
    "nucl-ex", "nucl-th",
    "physics.acc-ph", "physics.ao-ph", "physics.app-ph", "physics.atm-clus", "physics.atom-ph",
    "physics.bio-ph", "physics.chem-ph", "physics.class-ph", "physics.comp-ph", "physics.data-an",
    "physics.ed-ph", "physics.flu-dyn", "physics.gen-ph", "physics.geo-ph", "physics.hist-ph",
    "physics.ins-det", "physics.med-ph", "physics.optics", "physics.plasm-ph", "physics.pop-ph",
    "physics.soc-ph", "physics.space-ph", "quant-ph",
];

#[rustfmt::skip]
pub const QBIO_CATEGORIES: &[&str] = &[
    "q-bio", "q-bio.BM", "q-bio.CB", "q-bio.GN", "q-bio.MN", "q-bio.NC",
    "q-bio.OT", "q-bio.PE", "q-bio.QM", "q-bio.SC", "q-bio.TO",
];

#[rustfmt::skip]
pub const AGRICULTURE_CATEGORIES: &[&str] = &[
    "afs.AGR", "afs.AFS", "afs.ANI", "afs.ENV", "afs.ENG",
    "afs.FOO", "afs.HOR", "afs.PLA", "afs.SOI", "afs.OTHER",
];

fn intersects(meta: &PaperMetadata, area: &[&str]) -> bool {
    meta.category_codes().any(|code| area.contains(&code))
}

#[must_use]
pub fn is_physics_paper(meta: &PaperMetadata) -> bool {
    intersects(meta, PHYSICS_CATEGORIES)
}

#[must_use]
pub fn is_qbio_paper(meta: &PaperMetadata) -> bool {
    intersects(meta, QBIO_CATEGORIES)
}

#[must_use]
pub fn is_agriculture_paper(meta: &PaperMetadata) -> bool {
    intersects(meta, AGRICULTURE_CATEGORIES)
}

/// Whether `meta` passes the selected filter.
#[must_use]
pub fn accepts(filter: SubjectFilter, meta: &PaperMetadata) -> bool {
    match filter {
        SubjectFilter::All => true,
        SubjectFilter::Physics => is_physics_paper(meta),
        SubjectFilter::Qbio => is_qbio_paper(meta),
        SubjectFilter::Agriculture => is_agriculture_paper(meta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn with_categories(categories: &str) -> PaperMetadata {
        PaperMetadata::new("", "", categories)
    }

    #[rstest]
    #[case("hep-ph", true, false, false)]
    #[case("q-bio.GN", false, true, false)]
    #[case("afs.SOI", false, false, true)]
    #[case("cs.LG stat.ML", false, false, false)]
    #[case("cs.LG physics.bio-ph q-bio.BM", true, true, false)]
    #[case("", false, false, false)]
    fn predicates_test_set_intersection(
        #[case] categories: &str,
        #[case] physics: bool,
        #[case] qbio: bool,
        #[case] agri: bool,
    ) {
        let meta = with_categories(categories);
        assert_eq!(is_physics_paper(&meta), physics);
        assert_eq!(is_qbio_paper(&meta), qbio);
        assert_eq!(is_agriculture_paper(&meta), agri);
    }

    #[test]
    fn codes_match_exactly() {
        assert!(!is_physics_paper(&with_categories("hep")));
        assert!(!is_physics_paper(&with_categories("astro-ph")));
        assert!(is_qbio_paper(&with_categories("q-bio")));
    }

    #[test]
    fn agriculture_filter_excludes_physics_record() {
        assert!(!accepts(SubjectFilter::Agriculture, &with_categories("hep-ph")));
    }

    #[test]
    fn all_filter_accepts_uncategorized_record() {
        assert!(accepts(SubjectFilter::All, &with_categories("")));
    }
}
