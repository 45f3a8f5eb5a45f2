//! Orders sellers by profit and assigns bonuses.

use core_types::{SellerStat, round_money};
use std::cmp::Ordering;
use strategies::BonusStrategy;

/// Sorts `stats` by descending profit and stores each seller's rounded bonus.
///
/// The sort is stable: sellers with equal profit keep their relative order.
/// A NaN profit ranks as zero.
pub fn rank(stats: &mut [SellerStat], bonus: &dyn BonusStrategy) {
    stats.sort_by(|a, b| descending(ranking_value(a.profit), ranking_value(b.profit)));

    let total = stats.len();
    for (index, seller) in stats.iter_mut().enumerate() {
        let raw = bonus.calculate(index, total, seller);
        seller.bonus = round_money(raw);
        tracing::debug!(seller_id = %seller.id, index, raw, bonus = seller.bonus, "Bonus assigned.");
    }
}

/// Comparator for a descending sort. NaN must already be mapped away.
pub(crate) fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

pub(crate) fn ranking_value(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}
