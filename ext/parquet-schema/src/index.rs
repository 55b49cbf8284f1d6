use crate::field::{Field, FieldMap};

/// Flatten a resolved tree into pre-order, declaration-ordered nodes.
///
/// Groups appear immediately before their children.
pub fn list_fields(fields: &FieldMap) -> Vec<&Field> {
    let mut list = Vec::new();
    collect_fields(fields, &mut list);
    list
}

fn collect_fields<'a>(fields: &'a FieldMap, list: &mut Vec<&'a Field>) {
    for field in fields.values() {
        list.push(field);
        if let Some(children) = field.children() {
            collect_fields(children, list);
        }
    }
}

/// Pre-order index of a resolved tree
///
/// Each node is recorded as its route of map positions from the root, so the
/// index holds no borrows and stays valid while the tree keeps its shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldIndex {
    routes: Vec<Vec<usize>>,
    /// Positions in `routes` of the leaf nodes
    leaves: Vec<usize>,
}

impl FieldIndex {
    pub fn new(fields: &FieldMap) -> Self {
        let mut index = Self::default();
        index.collect(fields, &mut Vec::new());
        index
    }

    fn collect(&mut self, fields: &FieldMap, route: &mut Vec<usize>) {
        for (position, field) in fields.values().enumerate() {
            route.push(position);
            if field.is_leaf() {
                self.leaves.push(self.routes.len());
            }
            self.routes.push(route.clone());
            if let Some(children) = field.children() {
                self.collect(children, route);
            }
            route.pop();
        }
    }

    /// Number of indexed nodes, groups included
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Every node of `fields` in pre-order
    pub fn fields<'a>(&self, fields: &'a FieldMap) -> Vec<&'a Field> {
        self.routes
            .iter()
            .filter_map(|route| resolve_route(fields, route))
            .collect()
    }

    /// Leaf nodes of `fields` in pre-order
    pub fn leaves<'a>(&self, fields: &'a FieldMap) -> Vec<&'a Field> {
        self.leaves
            .iter()
            .filter_map(|&idx| resolve_route(fields, &self.routes[idx]))
            .collect()
    }
}

fn resolve_route<'a>(fields: &'a FieldMap, route: &[usize]) -> Option<&'a Field> {
    let (&last, parents) = route.split_last()?;
    let mut level = fields;
    for &position in parents {
        level = level.get_index(position)?.1.children()?;
    }
    level.get_index(last).map(|(_, field)| field)
}
