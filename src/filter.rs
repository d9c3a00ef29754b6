// Free-text search combined with an optional category filter.
use crate::categories;
use crate::model::Equipment;

/// True if the lowercased term occurs in any searchable field.
/// An empty term passes everything.
pub fn matches_search(eq: &Equipment, term: &str) -> bool {
    let q = term.to_lowercase();
    eq.name.to_lowercase().contains(&q)
        || eq.asset_no.to_lowercase().contains(&q)
        || eq.plate_serial_no.to_lowercase().contains(&q)
        || eq.department.to_lowercase().contains(&q)
        || eq.status.to_lowercase().contains(&q)
}

/// Records passing both the search and the category predicate, in their
/// original order. An unknown category id matches nothing.
pub fn filter_equipment<'a>(
    records: &'a [Equipment],
    search_term: &str,
    selected_category: Option<&str>,
) -> Vec<&'a Equipment> {
    let keywords = selected_category.map(|id| {
        categories::find(id)
            .map(|c| c.keywords)
            .unwrap_or_default()
    });

    records
        .iter()
        .filter(|eq| matches_search(eq, search_term))
        .filter(|eq| match keywords {
            Some(kw) => categories::matches_category(&eq.name, kw),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet() -> Vec<Equipment> {
        vec![
            Equipment {
                name: "Forklift 10Ton".into(),
                asset_no: "FRK-10TON-03".into(),
                status: "Active".into(),
                department: "Zone 1".into(),
                ..Equipment::default()
            },
            Equipment {
                name: "Dumper Truck".into(),
                asset_no: "TRK-22".into(),
                status: "In Use".into(),
                department: "Zone 2".into(),
                ..Equipment::default()
            },
            Equipment {
                name: "Mobile Crane -RT".into(),
                asset_no: "CRN-05".into(),
                status: "Maintenance".into(),
                plate_serial_no: "SN-9911".into(),
                ..Equipment::default()
            },
        ]
    }

    #[test]
    fn empty_term_and_no_category_returns_everything_in_order() {
        let records = fleet();
        let out = filter_equipment(&records, "", None);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].name, "Forklift 10Ton");
        assert_eq!(out[2].name, "Mobile Crane -RT");
    }

    #[test]
    fn search_covers_asset_number_case_insensitively() {
        let records = fleet();
        let out = filter_equipment(&records, "10ton", None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].asset_no, "FRK-10TON-03");
    }

    #[test]
    fn search_covers_plate_department_and_status() {
        let records = fleet();
        assert_eq!(filter_equipment(&records, "sn-9911", None).len(), 1);
        assert_eq!(filter_equipment(&records, "zone", None).len(), 2);
        assert_eq!(filter_equipment(&records, "maintenance", None).len(), 1);
    }

    #[test]
    fn category_filter_intersects_with_search() {
        let records = fleet();
        let trucks = filter_equipment(&records, "", Some("trucks"));
        assert_eq!(trucks.len(), 1);
        let zoned = filter_equipment(&records, "zone 2", Some("trucks"));
        assert_eq!(zoned.len(), 1);
        assert_eq!(zoned[0].name, "Dumper Truck");
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let records = fleet();
        assert!(filter_equipment(&records, "", Some("submarines")).is_empty());
    }
}
