//! The built-in series table. Pure data; no logic lives here.

use quadro_types::Source;

use super::{Category, Change, DisplayTransform, Measure, SeriesMetadata};

/// Core US series plus international series reachable through the
/// hierarchical provider.
pub(super) fn builtin_series() -> Vec<SeriesMetadata> {
    vec![
        // Employment
        SeriesMetadata::new(
            "UNRATE",
            "Unemployment Rate",
            Source::Fred,
            Category::Employment,
            DisplayTransform::Rate,
        )
        .keywords(&["unemployment", "jobless", "labor market"]),
        SeriesMetadata::new(
            "PAYEMS",
            "Total Nonfarm Payrolls",
            Source::Fred,
            Category::Employment,
            DisplayTransform::Change,
        )
        .keywords(&["jobs", "payrolls", "employment"]),
        SeriesMetadata::new(
            "JTSJOL",
            "Job Openings (JOLTS)",
            Source::Fred,
            Category::Employment,
            DisplayTransform::Level,
        )
        .keywords(&["job openings", "jolts", "labor demand", "vacancies"]),
        SeriesMetadata::new(
            "ICSA",
            "Initial Jobless Claims",
            Source::Fred,
            Category::Employment,
            DisplayTransform::Level,
        )
        .frequency("Weekly")
        .keywords(&["jobless claims", "initial claims", "layoffs"]),
        SeriesMetadata::new(
            "LNS12300060",
            "Prime-Age Employment-Population Ratio",
            Source::Fred,
            Category::Employment,
            DisplayTransform::Rate,
        )
        .keywords(&["prime age employment", "employment ratio", "working age"]),
        SeriesMetadata::new(
            "CIVPART",
            "Labor Force Participation Rate",
            Source::Fred,
            Category::Employment,
            DisplayTransform::Rate,
        )
        .keywords(&["labor force participation", "lfpr"]),
        // GDP
        SeriesMetadata::new(
            "GDPC1",
            "Real GDP",
            Source::Fred,
            Category::Gdp,
            DisplayTransform::YoyPercent,
        )
        .measure(Measure::Real)
        .change(Change::Level)
        .keywords(&["gdp", "growth", "economy", "output"]),
        SeriesMetadata::new(
            "A191RL1Q225SBEA",
            "Real GDP Growth (SAAR)",
            Source::Fred,
            Category::Gdp,
            DisplayTransform::Rate,
        )
        .keywords(&["gdp growth", "quarterly gdp"]),
        // Inflation
        SeriesMetadata::new(
            "CPIAUCSL",
            "Consumer Price Index",
            Source::Fred,
            Category::Inflation,
            DisplayTransform::YoyPercent,
        )
        .measure(Measure::Index)
        .change(Change::Level)
        .keywords(&["inflation", "cpi", "prices"]),
        SeriesMetadata::new(
            "CPILFESL",
            "Core CPI (Ex Food & Energy)",
            Source::Fred,
            Category::Inflation,
            DisplayTransform::YoyPercent,
        )
        .keywords(&["core inflation", "core cpi"]),
        SeriesMetadata::new(
            "PCEPILFE",
            "Core PCE (Fed's Target)",
            Source::Fred,
            Category::Inflation,
            DisplayTransform::YoyPercent,
        )
        .keywords(&["pce", "fed target", "core pce"]),
        SeriesMetadata::new(
            "CUSR0000SAF1",
            "CPI: Food at Home",
            Source::Fred,
            Category::Inflation,
            DisplayTransform::YoyPercent,
        )
        .measure(Measure::Index)
        .change(Change::Level)
        .keywords(&["food prices", "grocery prices", "food inflation"]),
        SeriesMetadata::new(
            "CUSR0000SETB01",
            "CPI: Gasoline",
            Source::Fred,
            Category::Inflation,
            DisplayTransform::YoyPercent,
        )
        .measure(Measure::Index)
        .change(Change::Level)
        .keywords(&["gas prices", "gasoline", "fuel prices", "energy prices"]),
        // Rates
        SeriesMetadata::new(
            "FEDFUNDS",
            "Federal Funds Rate",
            Source::Fred,
            Category::Rates,
            DisplayTransform::Rate,
        )
        .keywords(&["fed", "interest rates", "monetary policy"]),
        SeriesMetadata::new(
            "DGS10",
            "10-Year Treasury Yield",
            Source::Fred,
            Category::Rates,
            DisplayTransform::Rate,
        )
        .keywords(&["treasury", "yields", "bonds"]),
        // Housing
        SeriesMetadata::new(
            "MORTGAGE30US",
            "30-Year Mortgage Rate",
            Source::Fred,
            Category::Housing,
            DisplayTransform::Rate,
        )
        .keywords(&["mortgage", "housing", "rates"]),
        SeriesMetadata::new(
            "CSUSHPINSA",
            "Case-Shiller Home Price Index",
            Source::Fred,
            Category::Housing,
            DisplayTransform::YoyPercent,
        )
        .keywords(&["home prices", "housing", "real estate"]),
        SeriesMetadata::new(
            "HOUST",
            "Housing Starts",
            Source::Fred,
            Category::Housing,
            DisplayTransform::Level,
        )
        .keywords(&["housing starts", "construction", "new homes"]),
        // Wages
        SeriesMetadata::new(
            "CES0500000003",
            "Average Hourly Earnings (Private)",
            Source::Fred,
            Category::Wages,
            DisplayTransform::YoyPercent,
        )
        .measure(Measure::Nominal)
        .change(Change::Level)
        .keywords(&["wages", "hourly earnings", "pay", "wage growth"]),
        SeriesMetadata::new(
            "LES1252881600Q",
            "Real Median Weekly Earnings",
            Source::Fred,
            Category::Wages,
            DisplayTransform::YoyPercent,
        )
        .measure(Measure::Real)
        .change(Change::Level)
        .frequency("Quarterly")
        .keywords(&["real wages", "median earnings", "purchasing power"]),
        // Business
        SeriesMetadata::new(
            "RSXFS",
            "Retail Sales (Ex Food Services)",
            Source::Fred,
            Category::Business,
            DisplayTransform::YoyPercent,
        )
        .measure(Measure::Nominal)
        .change(Change::Level)
        .keywords(&["retail sales", "consumer spending", "retail"]),
        SeriesMetadata::new(
            "INDPRO",
            "Industrial Production Index",
            Source::Fred,
            Category::Business,
            DisplayTransform::YoyPercent,
        )
        .measure(Measure::Index)
        .change(Change::Level)
        .keywords(&["industrial production", "factory output"]),
        // Consumer
        SeriesMetadata::new(
            "UMCSENT",
            "Consumer Sentiment (U of Michigan)",
            Source::Fred,
            Category::Consumer,
            DisplayTransform::Level,
        )
        .measure(Measure::Index)
        .keywords(&["consumer sentiment", "consumer confidence"]),
        SeriesMetadata::new(
            "PCEC96",
            "Real Personal Consumption Expenditures",
            Source::Fred,
            Category::Consumer,
            DisplayTransform::YoyPercent,
        )
        .measure(Measure::Real)
        .change(Change::Level)
        .keywords(&["real consumer spending", "real pce"]),
        SeriesMetadata::new(
            "PSAVERT",
            "Personal Saving Rate",
            Source::Fred,
            Category::Consumer,
            DisplayTransform::Rate,
        )
        .keywords(&["saving rate", "savings", "personal savings"]),
        // Manufacturing
        SeriesMetadata::new(
            "DGORDER",
            "Durable Goods Orders",
            Source::Fred,
            Category::Manufacturing,
            DisplayTransform::YoyPercent,
        )
        .measure(Measure::Nominal)
        .change(Change::Level)
        .keywords(&["durable goods", "manufacturing orders", "capital goods"]),
        // International (hierarchical provider)
        SeriesMetadata::new(
            "eurozone_gdp",
            "Eurozone GDP Growth (YoY)",
            Source::Dbnomics,
            Category::Gdp,
            DisplayTransform::Rate,
        )
        .remote_id("Eurostat/namq_10_gdp/Q.CLV_PCH_SM.SCA.B1GQ.EA20")
        .measure(Measure::Real)
        .change(Change::Yoy)
        .keywords(&["eurozone", "europe", "eu", "gdp"]),
        SeriesMetadata::new(
            "eurozone_inflation",
            "Eurozone Inflation (HICP)",
            Source::Dbnomics,
            Category::Inflation,
            DisplayTransform::Rate,
        )
        .remote_id("Eurostat/prc_hicp_manr/M.RCH_A.CP00.EA")
        .change(Change::Yoy)
        .keywords(&["eurozone", "europe", "inflation", "hicp"]),
        SeriesMetadata::new(
            "uk_gdp",
            "UK GDP Growth (YoY)",
            Source::Dbnomics,
            Category::Gdp,
            DisplayTransform::Rate,
        )
        .remote_id("BOE/GDP/IHYR.Q")
        .measure(Measure::Real)
        .change(Change::Yoy)
        .keywords(&["uk", "britain", "gdp"]),
        SeriesMetadata::new(
            "china_gdp",
            "China GDP Growth (YoY)",
            Source::Dbnomics,
            Category::Gdp,
            DisplayTransform::Rate,
        )
        .remote_id("IMF/WEO:2024-10/CHN.NGDP_RPCH.pcent_change")
        .measure(Measure::Real)
        .change(Change::Yoy)
        .keywords(&["china", "gdp", "asia"]),
    ]
}
