use crate::geo::{GeoPoint, NewGeoPoint};
use geo_types::{coord, point, Coord, CoordFloat};

impl<T: CoordFloat> GeoPoint for geo_types::Point<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.0.y
    }

    fn lon(&self) -> Self::Num {
        self.0.x
    }
}

impl<T: CoordFloat> NewGeoPoint<T> for geo_types::Point<T> {
    fn latlon(lat: T, lon: T) -> Self {
        point!(x: lon, y: lat)
    }
}

impl<T: CoordFloat> GeoPoint for Coord<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y
    }

    fn lon(&self) -> Self::Num {
        self.x
    }
}

impl<T: CoordFloat> NewGeoPoint<T> for Coord<T> {
    fn latlon(lat: T, lon: T) -> Self {
        coord!(x: lon, y: lat)
    }
}
