use std::fmt::{Display, Formatter};
use std::slice::Iter;

use itertools::Itertools;

use crate::lit::Lit;
use crate::var::Var;

/// Total assignment: one boolean per variable, in variable-index order.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Model {
    data: Vec<bool>,
}

impl Model {
    pub fn new(data: Vec<bool>) -> Self {
        Self { data }
    }

    pub fn all_false(num_vars: usize) -> Self {
        Self::new(vec![false; num_vars])
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, bool> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    pub fn value(&self, var: Var) -> bool {
        self.data[var.index()]
    }

    /// Truth value of `lit` under this model.
    pub fn eval(&self, lit: Lit) -> bool {
        self.value(lit.var()) ^ lit.is_negated()
    }

    pub fn flip(&mut self, var: Var) {
        let value = &mut self.data[var.index()];
        *value = !*value;
    }
}

impl From<Vec<bool>> for Model {
    fn from(data: Vec<bool>) -> Self {
        Self::new(data)
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.data.iter().map(|&x| if x { "1" } else { "0" }).join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_eval() {
        let model = Model::new(vec![true, false]);
        assert!(model.eval(Lit::new(1)));
        assert!(!model.eval(Lit::new(-1)));
        assert!(!model.eval(Lit::new(2)));
        assert!(model.eval(Lit::new(-2)));
    }

    #[test]
    fn test_model_flip() {
        let mut model = Model::all_false(3);
        model.flip(Var::new(2));
        assert_eq!(model.as_slice(), &[false, true, false]);
        model.flip(Var::new(2));
        assert_eq!(model, Model::all_false(3));
    }

    #[test]
    fn test_model_display() {
        let model = Model::new(vec![true, false, true]);
        assert_eq!(format!("{}", model), "1 0 1");
        assert_eq!(format!("{}", Model::all_false(0)), "");
    }
}
