mod corpus_files;
mod poems;
mod properties;
