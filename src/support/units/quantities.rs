use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N2, P2, Z0},
};

/// Specific latent heat (energy per unit mass), J/kg in SI.
///
/// Shares its dimension with `uom`'s available energy, so values are built
/// with the `available_energy` units:
///
/// ```
/// use reentry_cooling::support::units::SpecificLatentHeat;
/// use uom::si::available_energy::{joule_per_kilogram, kilojoule_per_kilogram};
///
/// let lv = SpecificLatentHeat::new::<kilojoule_per_kilogram>(2260.0);
/// assert_eq!(lv.get::<joule_per_kilogram>(), 2_260_000.0);
/// ```
pub type SpecificLatentHeat = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
