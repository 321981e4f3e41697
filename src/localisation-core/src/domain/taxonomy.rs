use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;
use std::sync::LazyLock;
use strum::{AsRefStr, Display, EnumString};

/// Node of the vessel class schema, leaves are atomic gear labels.
#[derive(Debug)]
pub struct SchemaNode {
    pub name: &'static str,
    pub children: &'static [SchemaNode],
}

/// Coarse groupings used for aggregate reporting. `Other` is never produced by
/// the schema, it collects labels outside the atomic fishing set.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CoarseCategory {
    CargoOrTanker,
    Passenger,
    SeismicVessel,
    Tug,
    OtherFishing,
    DriftingLonglines,
    Seiners,
    FixedGear,
    SquidJigger,
    Trawlers,
    OtherNotFishing,
    Other,
}

#[derive(Debug)]
pub struct Taxonomy {
    fishing: BTreeSet<&'static str>,
    non_fishing: BTreeSet<&'static str>,
    coarse_mapping: Vec<(CoarseCategory, BTreeSet<&'static str>)>,
    fishing_category_map: HashMap<&'static str, CoarseCategory>,
}

const fn leaf(name: &'static str) -> SchemaNode {
    SchemaNode { name, children: &[] }
}

const fn node(name: &'static str, children: &'static [SchemaNode]) -> SchemaNode {
    SchemaNode { name, children }
}

pub static VESSEL_CLASS_SCHEMA: SchemaNode = node(
    "unknown",
    &[
        node(
            "fishing",
            &[
                leaf("drifting_longlines"),
                node(
                    "seiners",
                    &[
                        node(
                            "purse_seines",
                            &[leaf("tuna_purse_seines"), leaf("other_purse_seines")],
                        ),
                        leaf("other_seines"),
                    ],
                ),
                node(
                    "fixed_gear",
                    &[
                        leaf("set_longlines"),
                        leaf("set_gillnets"),
                        leaf("pots_and_traps"),
                    ],
                ),
                leaf("squid_jigger"),
                leaf("trawlers"),
                leaf("pole_and_line"),
                leaf("trollers"),
                leaf("dredge_fishing"),
            ],
        ),
        node(
            "non_fishing",
            &[
                leaf("passenger"),
                node(
                    "cargo_or_tanker",
                    &[
                        node("cargo_or_reefer", &[leaf("cargo"), leaf("reefer")]),
                        leaf("tanker"),
                        leaf("bunker"),
                    ],
                ),
                leaf("seismic_vessel"),
                leaf("tug"),
                leaf("patrol_vessel"),
                leaf("research"),
                leaf("supply_vessel"),
                leaf("dive_vessel"),
                leaf("fish_factory"),
                leaf("fish_tender"),
            ],
        ),
    ],
);

static TAXONOMY: LazyLock<Taxonomy> =
    LazyLock::new(|| Taxonomy::from_schema(&VESSEL_CLASS_SCHEMA));

/// The process wide taxonomy, built on first use.
pub fn taxonomy() -> &'static Taxonomy {
    &TAXONOMY
}

impl SchemaNode {
    pub fn is_atomic(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, name: &str) -> Option<&SchemaNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All leaf labels below (and including) this node.
    pub fn atomic(&self) -> BTreeSet<&'static str> {
        let mut out = BTreeSet::new();
        self.collect_atomic(&mut out);
        out
    }

    fn collect_atomic(&self, out: &mut BTreeSet<&'static str>) {
        if self.is_atomic() {
            out.insert(self.name);
        } else {
            for c in self.children {
                c.collect_atomic(out);
            }
        }
    }
}

impl Taxonomy {
    /// Expects the root to have a `fishing` and a `non_fishing` child, a
    /// missing branch yields an empty label set.
    pub fn from_schema(root: &SchemaNode) -> Self {
        let atomic_of = |name: &str| root.child(name).map(|n| n.atomic()).unwrap_or_default();
        let fishing = atomic_of("fishing");
        let non_fishing = atomic_of("non_fishing");

        let mut coarse: HashMap<CoarseCategory, BTreeSet<&'static str>> = HashMap::new();
        for (branch, extra) in [
            ("fishing", CoarseCategory::OtherFishing),
            ("non_fishing", CoarseCategory::OtherNotFishing),
        ] {
            let Some(branch) = root.child(branch) else {
                continue;
            };
            for c in branch.children {
                let key = match CoarseCategory::from_str(c.name) {
                    Ok(CoarseCategory::Other) | Err(_) => extra,
                    Ok(v) => v,
                };
                coarse.entry(key).or_default().extend(c.atomic());
            }
        }

        let coarse_mapping = CoarseCategory::schema_order()
            .iter()
            .map(|k| (*k, coarse.remove(k).unwrap_or_default()))
            .collect::<Vec<_>>();

        let fishing_category_map = coarse_mapping
            .iter()
            .flat_map(|(k, labels)| labels.iter().map(move |l| (*l, *k)))
            .filter(|(l, _)| fishing.contains(l))
            .collect();

        Self {
            fishing,
            non_fishing,
            coarse_mapping,
            fishing_category_map,
        }
    }

    /// `Some(true)` for atomic fishing labels, `Some(false)` for atomic
    /// non-fishing labels and `None` for anything else.
    pub fn is_fishing(&self, label: &str) -> Option<bool> {
        if self.fishing.contains(label) {
            Some(true)
        } else if self.non_fishing.contains(label) {
            Some(false)
        } else {
            None
        }
    }

    pub fn is_known(&self, label: &str) -> bool {
        self.is_fishing(label).is_some()
    }

    /// Coarse category of any atomic label, fishing or not.
    pub fn coarse_category(&self, label: &str) -> Option<CoarseCategory> {
        self.coarse_mapping
            .iter()
            .find(|(_, labels)| labels.contains(label))
            .map(|(k, _)| *k)
    }

    /// Category used by the localisation report, labels outside the atomic
    /// fishing set end up in `Other`.
    pub fn fishing_category(&self, label: &str) -> CoarseCategory {
        self.fishing_category_map
            .get(label)
            .copied()
            .unwrap_or(CoarseCategory::Other)
    }

    /// Report rows in order: fishing categories sorted by name, then `Other`.
    pub fn report_categories(&self) -> Vec<CoarseCategory> {
        let mut categories = self
            .fishing_category_map
            .values()
            .copied()
            .collect::<Vec<_>>();
        categories.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));
        categories.dedup();
        categories.push(CoarseCategory::Other);
        categories
    }

    pub fn coarse_mapping(&self) -> &[(CoarseCategory, BTreeSet<&'static str>)] {
        &self.coarse_mapping
    }
}

impl CoarseCategory {
    fn schema_order() -> &'static [CoarseCategory] {
        use CoarseCategory::*;
        &[
            CargoOrTanker,
            Passenger,
            SeismicVessel,
            Tug,
            OtherFishing,
            DriftingLonglines,
            Seiners,
            FixedGear,
            SquidJigger,
            Trawlers,
            OtherNotFishing,
        ]
    }
}
