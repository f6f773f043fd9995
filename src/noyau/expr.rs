// src/noyau/expr.rs
//
// Arbre d'expression : type somme fermé, possession exclusive des enfants
// (un arbre, jamais un cycle). Les feuilles sont Valeur / Variable.
//
// Un arbre fini a EXACTEMENT une racine; chaque noeud Fonction porte autant
// d'enfants que l'arité déclarée de son descripteur. Ces invariants sont
// garantis par la construction (rpn.rs), pas re-vérifiés ici.

use std::fmt;
use std::sync::Arc;

use super::fonctions::Fonction;
use super::operateurs::Op;

/// Noeud d'arbre. Immuable une fois rendu au compilateur appelant :
/// partageable et évaluable par plusieurs lecteurs en parallèle.
#[derive(Clone, Debug)]
pub enum Noeud {
    /// Littéral entier 64 bits signé.
    Valeur(i64),
    /// Référence par indice dans la liste de variables de la compilation.
    /// L'indice est la clé de liaison au moment de l'évaluation.
    Variable(usize),
    /// Négation unaire.
    Unaire(Op, Box<Noeud>),
    Binaire(Op, Box<Noeud>, Box<Noeud>),
    /// Appel de fonction : descripteur partagé + enfants dans l'ordre des
    /// arguments (enfants[0] = premier argument).
    Fonction(Arc<Fonction>, Vec<Noeud>),
}

/// Équivalence structurelle : même forme, mêmes indices de variables.
/// Deux noeuds Fonction sont égaux si leurs descripteurs portent le même nom
/// et la même arité (la procédure elle-même n'est pas comparable).
impl PartialEq for Noeud {
    fn eq(&self, autre: &Noeud) -> bool {
        use Noeud::*;

        match (self, autre) {
            (Valeur(a), Valeur(b)) => a == b,
            (Variable(a), Variable(b)) => a == b,
            (Unaire(op_a, x_a), Unaire(op_b, x_b)) => op_a == op_b && x_a == x_b,
            (Binaire(op_a, g_a, d_a), Binaire(op_b, g_b, d_b)) => {
                op_a == op_b && g_a == g_b && d_a == d_b
            }
            (Fonction(f_a, e_a), Fonction(f_b, e_b)) => {
                f_a.nom() == f_b.nom() && f_a.arite() == f_b.arite() && e_a == e_b
            }
            _ => false,
        }
    }
}

/* ------------------------ Affichage debug (pas "joli" final) ------------------------ */

impl fmt::Display for Noeud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Noeud::*;

        match self {
            Valeur(v) => write!(f, "{v}"),
            Variable(indice) => write!(f, "v{indice}"),
            Unaire(op, x) => write!(f, "{}({x})", op.symbole()),
            Binaire(op, gauche, droite) => write!(f, "({gauche}{}{droite})", op.symbole()),
            Fonction(fonction, enfants) => {
                write!(f, "{}(", fonction.nom())?;
                for (i, enfant) in enfants.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{enfant}")?;
                }
                write!(f, ")")
            }
        }
    }
}
