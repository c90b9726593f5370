pub mod fees;
pub mod impermanent_loss;

pub use fees::{
    DAYS_PER_YEAR, annualized_return_pct, apr_to_apy, daily_rate_from_apy, trading_fee,
};
pub use impermanent_loss::{hold_value_after_change, impermanent_loss, lp_value_after_il};
