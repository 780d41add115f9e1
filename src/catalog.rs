//! Market catalog: the fixed set of motorcycle models available for purchase.

/// A motorcycle model as listed on the market.
///
/// `max_profit` is the ceiling on profit above `cost` when the unit is
/// resold; the asking-price roll never exceeds `cost + max_profit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BikeModel {
    pub id: u32,
    pub name: &'static str,
    pub cost: f64,
    pub max_profit: f64,
}

/// The full market catalog. Fixed for the lifetime of the process.
const MARKET_CATALOG: [BikeModel; 4] = [
    BikeModel {
        id: 1,
        name: "Yamaha XJ6",
        cost: 50_000.0,
        max_profit: 20_000.0,
    },
    BikeModel {
        id: 2,
        name: "Honda Biz",
        cost: 15_000.0,
        max_profit: 4_500.0,
    },
    BikeModel {
        id: 3,
        name: "Kawasaki Ninja",
        cost: 62_000.0,
        max_profit: 31_000.0,
    },
    BikeModel {
        id: 4,
        name: "BMW S1000RR",
        cost: 57_900.0,
        max_profit: 22_000.0,
    },
];

/// Returns every model on the market, in display order.
pub fn catalog() -> &'static [BikeModel] {
    &MARKET_CATALOG
}

/// Looks up a model by catalog id. `None` is a normal outcome for a stale
/// or invalid id, not an error.
pub fn find_by_id(id: u32) -> Option<&'static BikeModel> {
    MARKET_CATALOG.iter().find(|model| model.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id_known_models() {
        let biz = find_by_id(2).unwrap();
        assert_eq!(biz.name, "Honda Biz");
        assert_eq!(biz.cost, 15_000.0);
        assert_eq!(biz.max_profit, 4_500.0);

        let ninja = find_by_id(3).unwrap();
        assert_eq!(ninja.name, "Kawasaki Ninja");
        assert_eq!(ninja.cost, 62_000.0);
    }

    #[test]
    fn test_find_by_id_unknown_model() {
        assert!(find_by_id(0).is_none());
        assert!(find_by_id(99).is_none());
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let models = catalog();
        for (i, a) in models.iter().enumerate() {
            for b in &models[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate catalog id {}", a.id);
            }
        }
    }

    #[test]
    fn test_catalog_values_are_sane() {
        for model in catalog() {
            assert!(model.cost > 0.0, "{} has non-positive cost", model.name);
            assert!(
                model.max_profit >= 0.0,
                "{} has negative max_profit",
                model.name
            );
        }
    }
}
