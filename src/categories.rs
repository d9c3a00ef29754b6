// Fixed equipment categories and the keyword matcher behind them.
use crate::config::Locale;
use crate::model::Equipment;

/// One category tile: stable id, localized display names, presentation
/// hints and the keyword list that decides membership.
///
/// Keywords are written pre-lowercased. They come straight from the fleet
/// sheet, misspellings included ("telehanlder", "manlif 26m") — those match
/// real records and must stay.
#[derive(Debug)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub name_ar: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub keywords: &'static [&'static str],
}

impl Category {
    pub fn display_name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.name,
            Locale::Ar => self.name_ar,
        }
    }
}

pub const CATEGORIES: [Category; 9] = [
    Category {
        id: "forklifts",
        name: "Forklifts",
        name_ar: "الرافعات الشوكية",
        icon: "forklift",
        color: "bg-blue-100 text-blue-800 hover:bg-blue-200",
        keywords: &["forklift 10ton", "forklift 16ton", "forklift"],
    },
    Category {
        id: "telehandlers",
        name: "Telehandlers",
        name_ar: "الرافعات التلسكوبية",
        icon: "construction",
        color: "bg-green-100 text-green-800 hover:bg-green-200",
        keywords: &["telehanlder", "telehandler"],
    },
    Category {
        id: "loaders",
        name: "Loaders",
        name_ar: "المحملات",
        icon: "loader",
        color: "bg-yellow-100 text-yellow-800 hover:bg-yellow-200",
        keywords: &["backhoe loader", "skid steel loader", "wheel loader", "loader"],
    },
    Category {
        id: "rollers",
        name: "Rollers/Compactors",
        name_ar: "الضاغطات",
        icon: "roller",
        color: "bg-purple-100 text-purple-800 hover:bg-purple-200",
        keywords: &[
            "roller compactor 3 ton",
            "roller compactor 10ton",
            "roller compactor  10ton",
            "roller compactor",
            "roller",
            "compactor",
        ],
    },
    Category {
        id: "excavators",
        name: "Excavators",
        name_ar: "الحفارات",
        icon: "shovel",
        color: "bg-orange-100 text-orange-800 hover:bg-orange-200",
        keywords: &["mini excavator", "excavator"],
    },
    Category {
        id: "trucks",
        name: "Trucks",
        name_ar: "الشاحنات",
        icon: "truck",
        color: "bg-red-100 text-red-800 hover:bg-red-200",
        keywords: &[
            "water tanker(18000ltr)",
            "boom truck",
            "dumper truck",
            "traila truck",
            "concrete mixer truck",
            "fire truck",
            "lowbed",
            "trailer",
            "dyna-3ton",
            "tanker",
            "dumper",
            "mixer",
            "truck",
        ],
    },
    Category {
        id: "cranes",
        name: "Cranes",
        name_ar: "الرافعات",
        icon: "building",
        color: "bg-indigo-100 text-indigo-800 hover:bg-indigo-200",
        keywords: &[
            "towercrane",
            "mobile crane -truck mounted",
            "mobile crane -rt",
            "mobile crane",
            "crawler crane",
            "crane",
        ],
    },
    Category {
        id: "lifts",
        name: "Manlifts/Scissor Lifts",
        name_ar: "المنصات الهوائية/المقصية",
        icon: "arrow-big-up",
        color: "bg-pink-100 text-pink-800 hover:bg-pink-200",
        keywords: &[
            "manlift 22m with operator",
            "manlif 26m with operator",
            "scissor lift with operator",
            "manlift",
            "scissor lift",
            "lift",
        ],
    },
    Category {
        id: "graders",
        name: "Graders",
        name_ar: "المسويات",
        icon: "gauge",
        color: "bg-teal-100 text-teal-800 hover:bg-teal-200",
        keywords: &["grader"],
    },
];

pub fn find(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// True iff any keyword is a substring of the lowercased name.
///
/// Membership is non-exclusive tagging: "Dumper Truck" matches both the
/// "dumper" and "truck" keywords, and a name may land in several
/// categories at once. Counts may overlap accordingly.
pub fn matches_category(name: &str, keywords: &[&str]) -> bool {
    let name = name.to_lowercase();
    keywords.iter().any(|k| name.contains(k))
}

pub fn count_for_category(records: &[Equipment], category_id: &str) -> usize {
    let Some(category) = find(category_id) else {
        return 0;
    };
    records
        .iter()
        .filter(|eq| matches_category(&eq.name, category.keywords))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Equipment {
        Equipment {
            name: name.to_string(),
            ..Equipment::default()
        }
    }

    #[test]
    fn catalog_is_fixed_and_ordered() {
        let ids: Vec<_> = CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            [
                "forklifts",
                "telehandlers",
                "loaders",
                "rollers",
                "excavators",
                "trucks",
                "cranes",
                "lifts",
                "graders"
            ]
        );
    }

    #[test]
    fn keywords_are_pre_lowercased() {
        for category in &CATEGORIES {
            for keyword in category.keywords {
                assert_eq!(*keyword, keyword.to_lowercase(), "in {}", category.id);
            }
        }
    }

    #[test]
    fn crane_names_match_cranes_only() {
        let cranes = find("cranes").unwrap();
        assert!(matches_category("Mobile Crane -RT", cranes.keywords));
        assert!(!matches_category("Water Tanker(18000LTR)", cranes.keywords));
    }

    #[test]
    fn matching_ignores_case() {
        let trucks = find("trucks").unwrap();
        assert!(matches_category("TRAILA TRUCK", trucks.keywords));
        assert!(matches_category("traila truck", trucks.keywords));
    }

    #[test]
    fn counts_are_independent_per_category() {
        let records = vec![
            named("Dumper Truck"),
            named("Water Tanker(18000LTR)"),
            named("Mobile Crane -Truck Mounted"),
        ];
        // "Mobile Crane -Truck Mounted" carries "truck", so it counts for
        // trucks and cranes at the same time.
        assert_eq!(count_for_category(&records, "trucks"), 3);
        assert_eq!(count_for_category(&records, "cranes"), 1);
        assert_eq!(count_for_category(&records, "graders"), 0);
        assert_eq!(count_for_category(&records, "no-such-category"), 0);
    }

    #[test]
    fn display_name_follows_locale() {
        use crate::config::Locale;
        let graders = find("graders").unwrap();
        assert_eq!(graders.display_name(Locale::En), "Graders");
        assert_eq!(graders.display_name(Locale::Ar), "المسويات");
    }
}
