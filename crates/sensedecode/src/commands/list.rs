//! `--list`: dump the known entries of whole tables.

use sensedecode_core::{Category, Decoded};

use crate::cli::CategoryArg;

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Host => Self::Host,
            CategoryArg::Device => Self::Device,
            CategoryArg::Plugin => Self::Plugin,
            CategoryArg::SenseKey => Self::SenseKey,
            CategoryArg::AdditionalSenseData => Self::AdditionalSenseData,
        }
    }
}

/// Known entries of each requested table, tables in category order.
/// Sentinels are not listed.
pub fn entries(requested: &[CategoryArg]) -> Vec<Decoded> {
    let mut categories: Vec<Category> = requested.iter().copied().map(Category::from).collect();
    categories.sort_unstable();
    categories.dedup();

    categories
        .into_iter()
        .flat_map(|category| {
            category
                .table()
                .entries()
                .iter()
                .map(move |entry| Decoded {
                    category,
                    entry: *entry,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn lists_whole_table_without_sentinel() {
        let listed = entries(&[CategoryArg::Plugin]);
        assert_eq!(listed.len(), Category::Plugin.table().len());
        assert!(listed.iter().all(|r| r.entry.name != "UNKNOWN"));
        assert_eq!(listed[0].entry.name, "GOOD");
    }

    #[test]
    fn tables_come_out_in_category_order_once() {
        let listed = entries(&[
            CategoryArg::SenseKey,
            CategoryArg::Host,
            CategoryArg::SenseKey,
        ]);
        let hosts = Category::Host.table().len();
        assert_eq!(listed.len(), hosts + Category::SenseKey.table().len());
        assert_eq!(listed[0].category, Category::Host);
        assert_eq!(listed[hosts].category, Category::SenseKey);
    }

    #[test]
    fn nothing_requested_lists_nothing() {
        assert!(entries(&[]).is_empty());
    }
}
