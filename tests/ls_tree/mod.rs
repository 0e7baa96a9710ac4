mod list_entries_of_head_tree;
