/*

    Provide utilities to parse slice scene JSON files.

    The parser is somewhat robust, let <a> be integer or float type,
    in JSON file <a> can be given both in quotes (string) or as is,
    and vectors can be given either as "<a> <a> <a>" or [<a>, <a>, <a>].

    e.g. In JSON file both
    "Dimensions": "64 64 32" and "Dimensions": [64, 64, 32]
    work as Dimensions: [usize; 3] in source code

    Direction matrices are 9 numbers given row by row.

    @date: 2 Oct, 2025
    @author: bartu
*/

use std::fmt::{self};
use std::marker::PhantomData;
use std::str::FromStr;
use std::fs::File;
use std::io::BufReader;

use serde::{Deserialize, Deserializer};
use serde::de::{self, Visitor, SeqAccess};

use crate::scene::SliceScene;
use crate::numeric::{Float, Vector3, Matrix3};

pub fn parse_scene_json(path: &str) -> Result<SliceScene, Box<dyn std::error::Error>> {
    let span = tracing::span!(tracing::Level::INFO, "load_scene");
    let _enter = span.enter();

    // Open file
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    tracing::debug!("Reading file from {}", path);

    // Parse JSON into Scene
    let scene: SliceScene = serde_json::from_reader(reader)?;
    Ok(scene)
}

pub fn parse_scene_str(text: &str) -> Result<SliceScene, Box<dyn std::error::Error>> {
    let scene: SliceScene = serde_json::from_str(text)?;
    Ok(scene)
}

pub trait From3<T>: Sized {
    fn new(x: T, y: T, z: T) -> Self;
}

impl From3<f64> for bevy_math::DVec3 {
    fn new(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z)
    }
}

impl From3<usize> for [usize; 3] {
    fn new(x: usize, y: usize, z: usize) -> Self {
        [x, y, z]
    }
}

pub(crate) fn deser_vec3<'de, D>(deserializer: D) -> Result<Vector3, D::Error>
where
    D: Deserializer<'de>,
{
    deser_triple::<D, Vector3, Float>(deserializer)
}

pub(crate) fn deser_dims<'de, D>(deserializer: D) -> Result<[usize; 3], D::Error>
where
    D: Deserializer<'de>,
{
    deser_triple::<D, [usize; 3], usize>(deserializer)
}

fn deser_triple<'de, D, V, F>(deserializer: D) -> Result<V, D::Error>
where
    D: Deserializer<'de>,
    F: Deserialize<'de> + FromStr,
    F::Err: fmt::Display,
    V: From3<F>,
{
    struct TripleVisitor<V, F>(PhantomData<(V, F)>);

    impl<'de, V, F> Visitor<'de> for TripleVisitor<V, F>
    where
        F: Deserialize<'de> + FromStr,
        F::Err: fmt::Display,
        V: From3<F>,
    {
        type Value = V;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("3 values as a string 'x y z' or an array [x, y, z]")
        }

        // Given "X Y Z"
        fn visit_str<E>(self, value: &str) -> Result<V, E>
        where
            E: de::Error,
        {
            parse_vec3_str::<V, F>(value).map_err(de::Error::custom)
        }

        // Given [X, Y, Z]
        fn visit_seq<A>(self, mut seq: A) -> Result<V, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let x: F = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in array"))?;
            let y: F = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in array"))?;
            let z: F = seq
                .next_element()?
                .ok_or_else(|| de::Error::custom("Expected 3 elements in array"))?;
            if seq.next_element::<F>()?.is_some() {
                return Err(de::Error::custom("Expected only 3 elements in array"));
            }
            Ok(V::new(x, y, z))
        }
    }

    deserializer.deserialize_any(TripleVisitor(PhantomData))
}

pub(crate) fn deser_matrix3<'de, D>(deserializer: D) -> Result<Matrix3, D::Error>
where
    D: Deserializer<'de>,
{
    /*
        Deserialize a 3x3 matrix given row by row, either as
        a string of 9 numbers or as an array of 9 numbers
    */
    let s: serde_json::Value = Deserialize::deserialize(deserializer)?;
    let values: Vec<Float> = match s {
        serde_json::Value::String(s) => s
            .split_whitespace()
            .map(|x| x.parse::<Float>().map_err(de::Error::custom))
            .collect::<Result<Vec<_>, D::Error>>()?,
        serde_json::Value::Array(arr) => arr
            .iter()
            .map(|v| v.as_f64().ok_or_else(|| de::Error::custom(format!("Expected number, found {v}"))))
            .collect::<Result<Vec<_>, D::Error>>()?,
        t => return Err(de::Error::custom(format!("Expected matrix string or array, found {t}"))),
    };

    let rows: [Float; 9] = values
        .try_into()
        .map_err(|v: Vec<Float>| {
            <D::Error as de::Error>::custom(format!("Expected 9 matrix entries, got {}", v.len()))
        })?;
    // from_cols_array reads column by column, so transpose back to rows
    Ok(Matrix3::from_cols_array(&rows).transpose())
}

fn parse_vec3_str<V, F>(s: &str) -> Result<V, String>
where
    F: FromStr,
    F::Err: fmt::Display,
    V: From3<F>,
{
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(format!("Expected 3 values, got {}", parts.len()));
    }
    let x = parts[0].parse::<F>().map_err(|e| e.to_string())?;
    let y = parts[1].parse::<F>().map_err(|e| e.to_string())?;
    let z = parts[2].parse::<F>().map_err(|e| e.to_string())?;
    Ok(V::new(x, y, z))
}
