pub(crate) const GEAR: &str = "⚙";
pub(crate) const HOURGLASS: &str = "⏳";
pub(crate) const WARNING: &str = "⚠";
pub(crate) const PARTY: &str = "🎉";
pub(crate) const SAD: &str = "😔";
pub(crate) const CHECK: &str = "✅";
pub(crate) const CORRECT_POSITION: &str = "🟢";
pub(crate) const WRONG_POSITION: &str = "🟡";
pub(crate) const WRONG_NUMBER: &str = "🔴";
pub(crate) const INFINITY: &str = "∞";
