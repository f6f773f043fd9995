// src/noyau/erreurs.rs
//
// Deux taxonomies, jamais mélangées :
// - ErreurCompile : détectée à la compilation, déterministe (même entrée =>
//   même erreur), tout-ou-rien : aucun résultat partiel.
// - ErreurEval    : faute d'exécution sur un arbre déjà compilé.

use thiserror::Error;

/// Erreurs de compilation d'une formule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCompile {
    /// Caractère hors de la classe acceptée, relevé à la validation.
    /// La position est un indice dans la chaîne NORMALISÉE (blancs retirés).
    #[error("caractère invalide '{caractere}' en position {position}")]
    CaractereInvalide { position: usize, caractere: char },

    /// Parenthèse fermante, virgule ou ouvrante sans correspondant structurel.
    #[error("parenthèses déséquilibrées")]
    ParentheseDesequilibree,

    /// Pas assez d'opérandes sur la pile pour l'opérateur `contexte`.
    #[error("opérandes manquants pour '{contexte}'")]
    PileInsuffisante { contexte: String },

    /// Appel d'une fonction absente du registre.
    #[error("fonction inconnue '{nom}'")]
    FonctionInconnue { nom: String },

    /// Moins d'opérandes disponibles que l'arité déclarée de la fonction.
    #[error("fonction '{nom}' : {attendu} argument(s) attendu(s), {disponible} disponible(s)")]
    AriteIncorrecte {
        nom: String,
        attendu: usize,
        disponible: usize,
    },

    /// Littéral entier qui ne tient pas sur 64 bits signés.
    #[error("littéral entier hors limites : '{jeton}'")]
    LitteralHorsLimites { jeton: String },

    /// La construction se termine avec 0 ou plus d'une racine.
    #[error("expression mal formée ({restants} noeud(s) restant(s))")]
    ExpressionMalFormee { restants: usize },
}

/// Fautes d'évaluation (jamais des erreurs de compilation).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Division ou modulo par zéro.
    #[error("division par zéro")]
    DivisionParZero,

    /// Liaison absente pour une variable de l'arbre.
    #[error("variable d'indice {indice} sans valeur liée")]
    VariableSansValeur { indice: usize },
}
