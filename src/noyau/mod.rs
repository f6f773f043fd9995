//! Noyau du compilateur de formules
//!
//! Organisation interne :
//! - jetons.rs     : normalisation + validation de caractères + découpe
//! - operateurs.rs : table unique des opérateurs (précédence, associativité, application)
//! - rpn.rs        : shunting-yard (infixe -> RPN) + construction de l'arbre
//! - expr.rs       : arbre d'expression (type somme fermé)
//! - fonctions.rs  : registre de fonctions nommées (possédé par l'hôte)
//! - eval.rs       : évaluation entière (64 bits) d'un arbre fini
//! - compile.rs    : pipeline complet
//! - erreurs.rs    : taxonomies compilation / évaluation

pub mod compile;
pub mod erreurs;
pub mod eval;
pub mod expr;
pub mod fonctions;
pub mod jetons;
pub mod operateurs;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use compile::compile_expression;
