//! Compilateur de formules entières
//!
//! Transforme une expression texte (opérateurs, parenthèses, littéraux,
//! variables nommées, fonctions nommées) en un arbre évaluable, réutilisable
//! autant de fois que voulu avec des liaisons de variables différentes.
//!
//! Pipeline (strictement de gauche à droite) :
//! texte brut -> jetons -> RPN (shunting-yard) -> arbre + liste de variables
//!
//! La compilation est pure et synchrone : tout est détecté à la compilation,
//! sauf la division par zéro (faute d'évaluation, jamais une erreur de
//! compilation).

pub mod noyau;

pub use noyau::compile::{compile_expression, Compilation};
pub use noyau::erreurs::{ErreurCompile, ErreurEval};
pub use noyau::eval::evalue;
pub use noyau::expr::Noeud;
pub use noyau::fonctions::{Fonction, Registre};
pub use noyau::operateurs::Op;
