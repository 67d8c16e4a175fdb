//! Zone geometry and the insertion-ordered zone set.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::monitor::error::ZoneError;

/// A 2-D vertex in pixel coordinates.
///
/// Serialized as a `[x, y]` pair to match the on-disk zone format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.x, self.y).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (x, y) = <(i32, i32)>::deserialize(deserializer)?;
        Ok(Self { x, y })
    }
}

/// An RGB display color, serialized as a `[r, g, b]` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.0, self.1, self.2).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (r, g, b) = <(u8, u8, u8)>::deserialize(deserializer)?;
        Ok(Self(r, g, b))
    }
}

/// A named polygonal region with a display color.
///
/// The polygon is an ordered vertex list, implicitly closed (last vertex
/// connects back to the first). A valid zone has at least 3 vertices; the
/// owning [`ZoneSet`] enforces this on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub color: Color,
    pub points: Vec<Point>,
}

impl Zone {
    pub fn new(name: impl Into<String>, color: Color, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            color,
            points,
        }
    }
}

/// An insertion-ordered collection of zones keyed by zone id.
///
/// Insertion order matters: classification resolves overlapping zones by
/// first match in this order, so the set preserves the order zones were
/// defined in rather than sorting by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneSet {
    entries: Vec<(String, Zone)>,
}

impl ZoneSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|(zid, _)| zid == id)
    }

    pub fn get(&self, id: &str) -> Option<&Zone> {
        self.entries
            .iter()
            .find(|(zid, _)| zid == id)
            .map(|(_, z)| z)
    }

    /// Display name for a zone id, `"Unknown"` when the id is not defined.
    pub fn name_of(&self, id: &str) -> &str {
        self.get(id).map(|z| z.name.as_str()).unwrap_or("Unknown")
    }

    /// Iterate zones in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Zone)> {
        self.entries.iter().map(|(id, z)| (id.as_str(), z))
    }

    /// Insert a zone under `id`, validating the polygon.
    pub fn define(&mut self, id: impl Into<String>, zone: Zone) -> Result<(), ZoneError> {
        let id = id.into();
        if self.contains(&id) {
            return Err(ZoneError::DuplicateZone(id));
        }
        if zone.points.len() < 3 {
            return Err(ZoneError::DegeneratePolygon {
                id,
                vertices: zone.points.len(),
            });
        }
        self.entries.push((id, zone));
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Option<Zone> {
        let idx = self.entries.iter().position(|(zid, _)| zid == id)?;
        Some(self.entries.remove(idx).1)
    }

    /// The two-zone factory-floor layout shipped as a fallback when no
    /// configuration file exists.
    pub fn default_layout() -> Self {
        let mut zones = ZoneSet::new();
        let production = Zone::new(
            "Production Area",
            Color(0, 255, 0),
            vec![
                Point::new(100, 200),
                Point::new(500, 200),
                Point::new(500, 500),
                Point::new(100, 500),
            ],
        );
        let storage = Zone::new(
            "Storage Area",
            Color(255, 165, 0),
            vec![
                Point::new(550, 200),
                Point::new(900, 200),
                Point::new(900, 500),
                Point::new(550, 500),
            ],
        );
        // Hand-built rectangles, cannot fail validation.
        let _ = zones.define("zone1", production);
        let _ = zones.define("zone2", storage);
        zones
    }
}

impl Serialize for ZoneSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, zone) in &self.entries {
            map.serialize_entry(id, zone)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ZoneSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ZoneSetVisitor;

        impl<'de> Visitor<'de> for ZoneSetVisitor {
            type Value = ZoneSet;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of zone id to zone definition")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((id, zone)) = access.next_entry::<String, Zone>()? {
                    entries.push((id, zone));
                }
                Ok(ZoneSet { entries })
            }
        }

        deserializer.deserialize_map(ZoneSetVisitor)
    }
}
