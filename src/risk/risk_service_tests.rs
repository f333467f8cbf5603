//! Unit tests for risk scoring.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::{Asset, AssetKind};
use crate::portfolio::Portfolio;
use crate::profiles::{RiskProfile, RiskTolerance};

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn holding(symbol: &str, kind: AssetKind, sector: &str, value: Decimal) -> Asset {
    Asset::new(symbol, symbol, kind, value, dec!(1), date(2024, 1, 15))
        .unwrap()
        .with_sector(sector)
}

fn portfolio_of(assets: Vec<Asset>) -> Portfolio {
    let mut portfolio = Portfolio::opened_on("p1", "Main", "u1", date(2024, 1, 1));
    for asset in assets {
        portfolio.add_asset(asset);
    }
    portfolio
}

#[test]
fn beta_weights_kind_constants_by_allocation() {
    let portfolio = portfolio_of(vec![
        holding("STK", AssetKind::Stock, "Technology", dec!(500)),
        holding("BND", AssetKind::Bond, "Fixed Income", dec!(500)),
    ]);
    // 50% at 1.0 plus 50% at 0.3
    assert_eq!(portfolio_beta(&portfolio), dec!(0.65));
}

#[test]
fn beta_of_an_empty_portfolio_is_zero() {
    let portfolio = portfolio_of(vec![]);
    assert_eq!(portfolio_beta(&portfolio), Decimal::ZERO);
}

#[test]
fn volatility_score_scales_beta_onto_ten_points() {
    // All stock: beta 1.0 -> 6.67 -> 7
    let all_stock = portfolio_of(vec![holding("STK", AssetKind::Stock, "Tech", dec!(100))]);
    assert_eq!(volatility_score(&all_stock), 7);

    // All bond: beta 0.3 -> 2
    let all_bond = portfolio_of(vec![holding("BND", AssetKind::Bond, "Fixed", dec!(100))]);
    assert_eq!(volatility_score(&all_bond), 2);
}

#[test]
fn volatility_score_rounds_midpoints_away_from_zero() {
    // 67.5% stock, 32.5% cash: beta 0.675 scales to exactly 4.5
    let mut portfolio = portfolio_of(vec![holding("STK", AssetKind::Stock, "Tech", dec!(675))]);
    portfolio.set_cash_balance(dec!(325));
    assert_eq!(portfolio_beta(&portfolio), dec!(0.675));
    assert_eq!(volatility_score(&portfolio), 5);
}

#[test]
fn diversification_rewards_spread_and_punishes_concentration() {
    // Five kinds, five sectors, nothing above 40%
    let spread = portfolio_of(vec![
        holding("STK", AssetKind::Stock, "Technology", dec!(20)),
        holding("ETF", AssetKind::Etf, "Broad Market", dec!(20)),
        holding("BND", AssetKind::Bond, "Fixed Income", dec!(20)),
        holding("REIT", AssetKind::RealEstate, "Real Estate", dec!(20)),
        holding("GLD", AssetKind::Commodity, "Materials", dec!(20)),
    ]);
    assert_eq!(diversification_score(&spread), 10);

    // One kind, one sector, fully concentrated
    let concentrated = portfolio_of(vec![holding("STK", AssetKind::Stock, "Tech", dec!(100))]);
    assert_eq!(diversification_score(&concentrated), 0);

    // Three kinds and three sectors sit in the middle
    let middling = portfolio_of(vec![
        holding("STK", AssetKind::Stock, "Technology", dec!(50)),
        holding("ETF", AssetKind::Etf, "Broad Market", dec!(30)),
        holding("BND", AssetKind::Bond, "Fixed Income", dec!(20)),
    ]);
    assert_eq!(diversification_score(&middling), 7);
}

#[test]
fn empty_portfolio_scores_zero_overall() {
    let portfolio = portfolio_of(vec![]);
    assert_eq!(volatility_score(&portfolio), 0);
    assert_eq!(diversification_score(&portfolio), 2);
    assert_eq!(overall_risk_score(&portfolio), 0);
}

#[test]
fn diversification_dampens_overall_risk() {
    // Volatility 6 with diversification 7 lands at 6 - 2
    let portfolio = portfolio_of(vec![
        holding("STK", AssetKind::Stock, "Technology", dec!(50)),
        holding("ETF", AssetKind::Etf, "Broad Market", dec!(30)),
        holding("BND", AssetKind::Bond, "Fixed Income", dec!(20)),
    ]);
    assert_eq!(volatility_score(&portfolio), 6);
    assert_eq!(overall_risk_score(&portfolio), 4);
}

#[test]
fn alignment_compares_portfolio_risk_to_the_profile() {
    // All-stock, one sector: overall risk 7
    let risky = portfolio_of(vec![holding("STK", AssetKind::Stock, "Tech", dec!(100))]);
    assert_eq!(overall_risk_score(&risky), 7);

    let matching = RiskProfile::new(RiskTolerance::Aggressive, 40, 10);
    assert_eq!(matching.risk_score(), 7);
    assert_eq!(
        assess_risk_alignment(&risky, &matching),
        RiskAlignment::WellAligned
    );

    let balanced = RiskProfile::new(RiskTolerance::Balanced, 40, 10);
    assert_eq!(balanced.risk_score(), 5);
    assert_eq!(
        assess_risk_alignment(&risky, &balanced),
        RiskAlignment::ModerateAlignment
    );

    let cautious = RiskProfile::new(RiskTolerance::Moderate, 55, 10);
    assert_eq!(cautious.risk_score(), 3);
    assert_eq!(
        assess_risk_alignment(&risky, &cautious),
        RiskAlignment::TooRisky
    );

    // All-bond portfolio against a high-score profile
    let sleepy = portfolio_of(vec![holding("BND", AssetKind::Bond, "Fixed", dec!(100))]);
    let bold = RiskProfile::new(RiskTolerance::Aggressive, 25, 20);
    assert_eq!(bold.risk_score(), 9);
    assert_eq!(
        assess_risk_alignment(&sleepy, &bold),
        RiskAlignment::TooConservative
    );
}

#[test]
fn sharpe_ratio_nets_the_risk_free_rate() {
    let ratio = sharpe_ratio(dec!(0.10), dec!(1.0));
    assert_eq!(ratio.round_dp(4), dec!(0.5333));

    assert_eq!(sharpe_ratio(dec!(0.10), Decimal::ZERO), Decimal::ZERO);
}

#[test]
fn risk_report_carries_every_figure() {
    let portfolio = portfolio_of(vec![
        holding("STK", AssetKind::Stock, "Technology", dec!(50)),
        holding("BND", AssetKind::Bond, "Fixed Income", dec!(50)),
    ]);
    let profile = RiskProfile::new(RiskTolerance::Balanced, 40, 10);
    let report = risk_report(&portfolio, &profile);

    assert!(report.contains("=== Risk Analysis Report ==="));
    assert!(report.contains("Beta: 0.65"));
    assert!(report.contains("Volatility Score: 4/10"));
    assert!(report.contains("Risk Alignment:"));
    assert!(report.contains("Target Risk (from profile): 5/10"));
}

const KINDS: [AssetKind; 7] = [
    AssetKind::Stock,
    AssetKind::Bond,
    AssetKind::MutualFund,
    AssetKind::Etf,
    AssetKind::Cash,
    AssetKind::RealEstate,
    AssetKind::Commodity,
];

const SECTORS: [&str; 6] = [
    "Technology",
    "Health Care",
    "Financials",
    "Energy",
    "Utilities",
    "General",
];

proptest! {
    // Whatever the mix of holdings and cash, every score stays on its scale.
    #[test]
    fn scores_stay_on_their_scales(
        holdings in prop::collection::vec(
            (0usize..KINDS.len(), 0usize..SECTORS.len(), 1u32..10_000, 0u32..500, 0u32..500),
            0..12,
        ),
        cash in 0u32..1_000_000,
    ) {
        let mut portfolio = Portfolio::opened_on("p1", "Fuzz", "u1", date(2024, 1, 1));
        portfolio.set_cash_balance(Decimal::from(cash));
        for (i, (kind, sector, qty, paid, current)) in holdings.into_iter().enumerate() {
            let asset = Asset::new(
                format!("SYM{}", i),
                format!("Holding {}", i),
                KINDS[kind],
                Decimal::from(qty),
                Decimal::from(paid),
                date(2024, 1, 15),
            )
            .unwrap()
            .with_sector(SECTORS[sector])
            .with_current_price(Decimal::from(current));
            portfolio.add_asset(asset);
        }

        prop_assert!(portfolio_beta(&portfolio) >= Decimal::ZERO);
        prop_assert!((0..=10).contains(&volatility_score(&portfolio)));
        prop_assert!((0..=10).contains(&diversification_score(&portfolio)));
        prop_assert!((0..=10).contains(&overall_risk_score(&portfolio)));
    }
}
