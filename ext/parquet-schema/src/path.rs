//! Field lookup by path
//!
//! A path is either a list of segments (`["links", "url"]`) or a single
//! comma-delimited string (`"links,url"`), the same form used for column keys
//! in a [`ColumnarBuffer`](crate::ColumnarBuffer).

use crate::{
    field::{Field, FieldMap},
    ParquetError, Result,
};

/// Anything that can be split into path segments
pub trait FieldPath {
    fn segments(&self) -> Vec<&str>;
}

impl FieldPath for str {
    fn segments(&self) -> Vec<&str> {
        self.split(',').collect()
    }
}

impl FieldPath for String {
    fn segments(&self) -> Vec<&str> {
        self.as_str().segments()
    }
}

impl FieldPath for [&str] {
    fn segments(&self) -> Vec<&str> {
        self.to_vec()
    }
}

impl<const N: usize> FieldPath for [&str; N] {
    fn segments(&self) -> Vec<&str> {
        self.to_vec()
    }
}

impl FieldPath for Vec<&str> {
    fn segments(&self) -> Vec<&str> {
        self.clone()
    }
}

impl FieldPath for [String] {
    fn segments(&self) -> Vec<&str> {
        self.iter().map(String::as_str).collect()
    }
}

impl FieldPath for Vec<String> {
    fn segments(&self) -> Vec<&str> {
        self.as_slice().segments()
    }
}

/// Find the field at the end of `path`
pub fn find_field<'a, P>(fields: &'a FieldMap, path: &P) -> Result<&'a Field>
where
    P: FieldPath + ?Sized,
{
    let segments = path.segments();
    let mut target = None;
    walk(fields, &segments, |field| target = Some(field))?;
    target.ok_or_else(|| ParquetError::field_not_found(&segments))
}

/// Find every field from the root down to the end of `path`, root first
pub fn find_field_branch<'a, P>(fields: &'a FieldMap, path: &P) -> Result<Vec<&'a Field>>
where
    P: FieldPath + ?Sized,
{
    let segments = path.segments();
    let mut branch = Vec::with_capacity(segments.len());
    walk(fields, &segments, |field| branch.push(field))?;
    if branch.is_empty() {
        return Err(ParquetError::field_not_found(&segments));
    }
    Ok(branch)
}

/// Follow `segments` through the tree, handing each visited field to `visit`
fn walk<'a, F>(fields: &'a FieldMap, segments: &[&str], mut visit: F) -> Result<()>
where
    F: FnMut(&'a Field),
{
    let mut level = fields;
    for (idx, segment) in segments.iter().enumerate() {
        let field = level
            .get(*segment)
            .ok_or_else(|| ParquetError::field_not_found(&segments[..=idx]))?;
        visit(field);

        if idx + 1 < segments.len() {
            level = field
                .children()
                .ok_or_else(|| ParquetError::field_not_found(&segments[..=idx + 1]))?;
        }
    }
    Ok(())
}
