// src/noyau/eval.rs
//
// Évaluation entière (64 bits, enroulante) d'un arbre fini.
//
// L'arbre est immuable : plusieurs lecteurs peuvent évaluer le même arbre en
// parallèle, chacun avec ses propres liaisons. L'évaluation ne mute rien.

use super::erreurs::ErreurEval;
use super::expr::Noeud;

/// Évalue `noeud` avec `valeurs[i]` comme valeur de la variable d'indice i
/// (l'ordre est celui de la liste de variables rendue par la compilation).
pub fn evalue(noeud: &Noeud, valeurs: &[i64]) -> Result<i64, ErreurEval> {
    match noeud {
        Noeud::Valeur(v) => Ok(*v),

        Noeud::Variable(indice) => {
            valeurs
                .get(*indice)
                .copied()
                .ok_or(ErreurEval::VariableSansValeur { indice: *indice })
        }

        Noeud::Unaire(op, enfant) => {
            let v = evalue(enfant, valeurs)?;
            op.applique_unaire(v)
        }

        Noeud::Binaire(op, gauche, droite) => {
            let g = evalue(gauche, valeurs)?;
            let d = evalue(droite, valeurs)?;
            op.applique_binaire(g, d)
        }

        Noeud::Fonction(fonction, enfants) => {
            let mut arguments = Vec::with_capacity(enfants.len());
            for enfant in enfants {
                arguments.push(evalue(enfant, valeurs)?);
            }
            fonction.applique(&arguments)
        }
    }
}
