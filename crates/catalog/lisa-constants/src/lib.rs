//! LISA Constants
//!
//! Values sanctioned by the LISA Consortium for physical constants and
//! mission parameters, intended to be used consistently by software related
//! to the simulation of the instrument, of gravitational wave signals, and
//! others.
//!
//! ```
//! let constants = lisa_constants::registry()?;
//! assert_eq!(constants.value("c")?, 299_792_458.0);
//! # Ok::<(), lisa_constants::RegistryError>(())
//! ```

pub use lc_registry::{Constant, ConstantValue, DuplicatePolicy, References, Registry, RegistryError};

/// File stem of the generated headers, `lisaconstants.h` and `lisaconstants.hpp`
pub const HEADER_STEM: &str = "lisaconstants";

const CODATA_2014: [&str; 2] = [
    concat!(
        "P.J. Mohr, B.N. Taylor, D.B. Newell, 9 July 2015, 'The 2014 CODATA Recommended Values of the Fundamental ",
        "Physical Constants', National Institute of Standards and Technology, Gaithersburg, MD 20899-8401; ",
        "http://www.codata.org/",
    ),
    concat!(
        "http://physics.nist.gov/constants (Web Version 7.0). See also the IAU (2009) System of Astronomical Constants ",
        "(IAU, August 2009, 'IAU 2009 Astronomical Constants', IAU 2009 Resolution B2 adopted at the XXVII-th General ",
        "Assembly of the IAU. See also IAU, 10 August 2009, 'IAU WG on NSFA Current Best Estimates', ",
        "http://maia.usno.navy.mil/NSFA/NSFA_cbe.html)",
    ),
];

const SIMON_1994: &str = concat!(
    "J.L. Simon, P. Bretagnon, J. Chapront, M. Chapront-Touze, G. Francou, J. Laskar, 1994, ",
    "'Numerical expressions for precession formulae and mean elements for the Moon and the planets', ",
    "A&A, 282, 663 (1994A&A...282..663S)",
);

/// Builds the full catalogue
///
/// # Errors
///
/// Fails if a derived constant refers to a name defined later
pub fn registry() -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    define_all(&mut registry)?;
    Ok(registry)
}

/// Defines every LISA constant into `registry`, in dependency order
///
/// # Errors
///
/// Fails on duplicate names under [`DuplicatePolicy::Reject`], or if a
/// derived constant refers to a name that is not registered yet
pub fn define_all(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.define(
        "SPEED_OF_LIGHT",
        299_792_458.0,
        Some("m/s"),
        "Speed of light in a vacuum",
        None,
        CODATA_2014,
    )?;
    registry.alias("c", "SPEED_OF_LIGHT")?;

    registry.define(
        "SIDEREALYEAR_J2000DAY",
        365.256_363_004,
        Some("day"),
        "Number of days per sidereal year",
        None,
        SIMON_1994,
    )?;

    registry.define(
        "TROPICALYEAR_J2000DAY",
        365.242_190_402,
        Some("day"),
        "Number of days per tropical year",
        None,
        SIMON_1994,
    )?;

    // Multiplied step by step, a pre-folded 86400.0 rounds differently
    let astronomical_year = registry.value("SIDEREALYEAR_J2000DAY")? * 60.0 * 60.0 * 24.0;
    registry.define(
        "ASTRONOMICAL_YEAR",
        astronomical_year,
        Some("s"),
        "Astronomical year",
        None,
        SIMON_1994,
    )?;

    registry.define(
        "ASTRONOMICAL_UNIT",
        149_597_870_700.0,
        Some("m"),
        "Astronomical unit",
        None,
        concat!(
            "IAU, August 2012, 'Re-definition of the astronomical unit of length', ",
            "IAU 2012 Resolution B2 adopted at the XXVIII-th General Assembly of the IAU",
        ),
    )?;
    registry.alias("au", "ASTRONOMICAL_UNIT")?;

    registry.define(
        "GM_SUN",
        1.327_124_400_419_394e20,
        Some("m^3/s^2"),
        "Sun gravitational parameter",
        None,
        "Table 8 from http://ipnpr.jpl.nasa.gov/progress_report/42-196/196C.pdf",
    )?;

    let schwarzschild_radius = 2.0 * registry.value("GM_SUN")? / registry.value("c")?.powi(2);
    registry.define(
        "SUN_SCHWARZSCHILD_RADIUS",
        schwarzschild_radius,
        Some("m"),
        "Sun Schwarzschild radius",
        None,
        None::<&str>,
    )?;

    registry.define(
        "PARSEC_METER",
        3.085_677_581_491_367_4e16,
        Some("m"),
        "Parsec expressed in meters",
        None,
        None::<&str>,
    )?;

    registry.define(
        "NEWTON_CONSTANT",
        6.674_080e-11,
        Some("m^3/kg/s^2"),
        "Newton's universal constant of gravitation",
        None,
        CODATA_2014,
    )?;

    registry.define("SUN_MASS", 1.988_48e30, Some("kg"), "Solar mass", None, None::<&str>)?;

    Ok(())
}
