//! Speed unit conversions

const KPH_PER_MPH: f64 = 1.60934;
const MPH_PER_KNOT: f64 = 1.15078;

pub fn mph_to_kph(mph: f64) -> f64 {
    mph * KPH_PER_MPH
}

pub fn kph_to_mph(kph: f64) -> f64 {
    kph / KPH_PER_MPH
}

pub fn knots_to_mph(knots: f64) -> f64 {
    knots * MPH_PER_KNOT
}

pub fn mph_to_knots(mph: f64) -> f64 {
    mph / MPH_PER_KNOT
}
